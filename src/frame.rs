use crate::core::{FrameScheduler, FrameToken};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Shared slot holding the per-frame callback. The callback captures the
/// animator, and the animator's scheduler holds this slot, so the slot must be
/// emptied on teardown to release both.
pub type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame`-driven scheduler.
pub struct RafScheduler {
    window: web::Window,
    tick: TickSlot,
}

impl RafScheduler {
    pub fn new(window: web::Window, tick: TickSlot) -> Self {
        Self { window, tick }
    }
}

impl FrameScheduler for RafScheduler {
    fn request(&mut self) -> Option<FrameToken> {
        let slot = self.tick.borrow();
        let cb = slot.as_ref()?;
        match self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => Some(FrameToken(id)),
            Err(e) => {
                log::error!("[fog] requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel(&mut self, token: FrameToken) {
        _ = self.window.cancel_animation_frame(token.0);
    }
}

/// Install the per-frame callback into `tick`.
pub fn install_tick(tick: &TickSlot, mut on_frame: impl FnMut() + 'static) {
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || on_frame()) as Box<dyn FnMut()>));
}
