use crate::background::FogBackground;
use crate::burst;
use crate::constants::{NAV_BUTTON_ID, NAV_DELAY_MS, SMOKE_CANVAS_ID};
use crate::core::BurstConfig;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Run `init` once the DOM is parsed: now, or on `DOMContentLoaded` while the
/// document is still loading.
pub fn when_ready(document: &web::Document, init: impl FnOnce() + 'static) {
    if document.ready_state() == "loading" {
        let mut init = Some(init);
        dom::listen_forever(document, "DOMContentLoaded", move |_ev: web::Event| {
            if let Some(f) = init.take() {
                f();
            }
        });
    } else {
        init();
    }
}

/// Look up the fog canvas; anything other than a `<canvas>` counts as absent.
fn smoke_canvas(document: &web::Document) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(SMOKE_CANVAS_ID)?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()
}

/// Start the fog on `#smokeCanvas`. Failures are logged and leave the
/// background off; they never affect the other effects.
pub fn start_background(document: &web::Document) -> Option<FogBackground> {
    match FogBackground::start(smoke_canvas(document)) {
        Ok(bg) => bg,
        Err(e) => {
            log::error!("[page] fog background failed: {:?}", e);
            None
        }
    }
}

/// Hold the navigation button's click for `NAV_DELAY_MS`, then follow its href.
pub fn wire_nav_button(document: &web::Document) {
    let Some(btn) = document.get_element_by_id(NAV_BUTTON_ID) else {
        return;
    };
    let target = btn.clone();
    dom::listen_forever(&btn, "click", move |ev: web::Event| {
        ev.prevent_default();
        let Some(href) = target.get_attribute("href") else {
            return;
        };
        spawn_local(async move {
            dom::sleep_ms(NAV_DELAY_MS).await;
            if let Some(w) = web::window() {
                if let Err(e) = w.location().set_href(&href) {
                    log::error!("[page] navigation to {href} failed: {:?}", e);
                }
            }
        });
    });
}

/// Start every effect the page has targets for and register unload teardown.
pub fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let background = Rc::new(RefCell::new(start_background(&document)));

    burst::wire_triggers(&document, BurstConfig::default());
    burst::wire_glow(&document);
    wire_nav_button(&document);

    dom::listen_forever(&window, "beforeunload", move |_ev: web::Event| {
        if let Some(mut bg) = background.borrow_mut().take() {
            bg.stop();
        }
    });
    Ok(())
}
