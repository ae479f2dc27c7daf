use crate::canvas::CanvasSurface;
use crate::core::{AnimatorState, BackgroundAnimator, FogParams, FogSurface, SurfaceSize};
use crate::dom;
use crate::frame::{self, RafScheduler, TickSlot};
use instant::Instant;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Animator = BackgroundAnimator<CanvasSurface, RafScheduler, SmallRng>;

/// Running fog background bound to one canvas.
///
/// Owns the resize listener and the frame callback; `stop` (or dropping the
/// value) detaches both and cancels the pending frame.
pub struct FogBackground {
    window: web::Window,
    animator: Rc<RefCell<Animator>>,
    tick: TickSlot,
    on_resize: Option<Closure<dyn FnMut()>>,
}

impl FogBackground {
    /// Start animating `canvas`. `None` means the page has no usable canvas
    /// (no error; the background just stays off).
    pub fn start(canvas: Option<web::HtmlCanvasElement>) -> anyhow::Result<Option<Self>> {
        let Some(canvas) = canvas else {
            log::debug!("[fog] no canvas; skipping background");
            return Ok(None);
        };
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;
        let surface = CanvasSurface::new(&document, canvas)?;

        let tick: TickSlot = Rc::new(RefCell::new(None));
        let animator = Rc::new(RefCell::new(Animator::new(
            RafScheduler::new(window.clone(), tick.clone()),
            FogParams::default(),
            SmallRng::from_entropy(),
        )));

        let animator_resize = animator.clone();
        let window_resize = window.clone();
        let on_resize = Closure::wrap(Box::new(move || {
            animator_resize
                .borrow_mut()
                .resize(dom::viewport_size(&window_resize));
        }) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        // Installed last: the tick closure and the scheduler form a cycle
        // that only `stop` breaks.
        let started = Instant::now();
        let animator_tick = animator.clone();
        frame::install_tick(&tick, move || {
            animator_tick.borrow_mut().frame(started.elapsed());
        });

        let mut bg = Self {
            window: window.clone(),
            animator,
            tick,
            on_resize: Some(on_resize),
        };
        let viewport = dom::viewport_size(&window);
        if !bg.animator.borrow_mut().start(Some(surface), viewport) {
            bg.stop();
            return Ok(None);
        }
        Ok(Some(bg))
    }

    /// Detach the resize listener, cancel the pending frame and release the
    /// frame callback. Idempotent.
    pub fn stop(&mut self) {
        self.animator.borrow_mut().stop();
        if let Some(cb) = self.on_resize.take() {
            _ = self
                .window
                .remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
        }
        self.tick.borrow_mut().take();
    }

    pub fn state(&self) -> AnimatorState {
        self.animator.borrow().state()
    }

    pub fn frames(&self) -> u64 {
        self.animator.borrow().frames()
    }

    /// Current backing size of the canvas.
    pub fn surface_size(&self) -> Option<SurfaceSize> {
        self.animator.borrow().surface().map(|s| s.size())
    }
}

impl Drop for FogBackground {
    fn drop(&mut self) {
        self.stop();
    }
}
