use crate::constants::{GLOW_SELECTOR, PARTICLE_CLASS, TRIGGER_SELECTOR};
use crate::core::{BurstConfig, Hover, ParticleBurster, ParticleHost, ParticleSpec, TriggerRect};
use crate::dom;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Particles as `div`s appended to `<body>`, removed by a timer.
pub struct DomParticleHost {
    document: web::Document,
    body: web::HtmlElement,
}

impl DomParticleHost {
    pub fn new(document: web::Document) -> Option<Self> {
        let body = document.body()?;
        Some(Self { document, body })
    }
}

impl ParticleHost for DomParticleHost {
    type Handle = web::Element;

    fn insert(&mut self, spec: &ParticleSpec) -> Option<web::Element> {
        let el = self
            .document
            .create_element("div")
            .ok()?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        el.set_class_name(PARTICLE_CLASS);
        let style = el.style();
        for (name, value) in spec.style_properties() {
            _ = style.set_property(name, &value);
        }
        self.body.append_child(&el).ok()?;
        Some(el.into())
    }

    fn remove_after(&mut self, handle: web::Element, delay: Duration) {
        let ms = delay.as_millis().min(i32::MAX as u128) as i32;
        spawn_local(async move {
            dom::sleep_ms(ms).await;
            handle.remove();
        });
    }
}

fn trigger_rect(el: &web::Element) -> TriggerRect {
    let r = el.get_bounding_client_rect();
    TriggerRect {
        left: r.left() as f32,
        top: r.top() as f32,
        width: r.width() as f32,
        height: r.height() as f32,
    }
}

/// Give every `.smoke-btn` a click handler that bursts particles around its
/// centre. Returns the number of triggers wired.
pub fn wire_triggers(document: &web::Document, config: BurstConfig) -> usize {
    let triggers = dom::query_all(document, TRIGGER_SELECTOR);
    if triggers.is_empty() {
        return 0;
    }
    let Some(host) = DomParticleHost::new(document.clone()) else {
        log::warn!("[burst] document has no body; triggers left unwired");
        return 0;
    };
    if !config.removal_outlives_animation() {
        log::warn!(
            "[burst] removal after {:?} may cut animations up to {:?}",
            config.removal_delay,
            config.max_animation()
        );
    }
    let host = Rc::new(RefCell::new(host));
    let burster = Rc::new(RefCell::new(ParticleBurster::new(
        config,
        SmallRng::from_entropy(),
    )));

    for trigger in &triggers {
        let el = trigger.clone();
        let host = host.clone();
        let burster = burster.clone();
        dom::listen_forever(trigger, "click", move |_ev: web::Event| {
            let center = trigger_rect(&el).center();
            burster
                .borrow_mut()
                .burst(&mut *host.borrow_mut(), center);
        });
    }
    log::info!("[burst] wired {} trigger(s)", triggers.len());
    triggers.len()
}

/// Apply the hover transition to `el`. Stateless, so repeating it is harmless.
pub fn apply_hover(el: &web::HtmlElement, hover: Hover) {
    _ = el.style().set_property("filter", hover.filter());
}

/// Toggle the glow filter on `[data-hover="glow"]` elements.
pub fn wire_glow(document: &web::Document) -> usize {
    let mut wired = 0;
    for el in dom::query_all(document, GLOW_SELECTOR) {
        let Ok(el) = el.dyn_into::<web::HtmlElement>() else {
            continue;
        };
        for hover in [Hover::Enter, Hover::Leave] {
            let target = el.clone();
            dom::listen_forever(&el, hover.event_type(), move |ev: web::Event| {
                if let Some(hover) = Hover::from_event_type(&ev.type_()) {
                    apply_hover(&target, hover);
                }
            });
        }
        wired += 1;
    }
    if wired > 0 {
        log::info!("[glow] wired {} element(s)", wired);
    }
    wired
}
