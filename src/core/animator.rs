//! Background fog lifecycle.
//!
//! `BackgroundAnimator` owns the drawing surface and the pending frame
//! request. The host supplies two seams: a [`FogSurface`] to draw on and a
//! [`FrameScheduler`] that calls back into [`BackgroundAnimator::frame`] once
//! per display refresh. Between `start` and `stop` exactly one frame request
//! is outstanding at a time; after `stop` none is.

use super::fog::{FogFrame, FogParams};
use super::noise::NoisePattern;
use super::surface::{Rgba, SurfaceSize};
use rand::Rng;
use std::time::Duration;

/// Raster target the fog is drawn onto.
pub trait FogSurface {
    fn size(&self) -> SurfaceSize;
    fn set_size(&mut self, size: SurfaceSize);
    /// Full-surface fill with `color` using normal compositing.
    fn fill_trail(&mut self, color: Rgba);
    /// Additive fog pass: translate, fill the gradient, overlay the pattern.
    fn draw_fog(&mut self, frame: &FogFrame, pattern: &NoisePattern);
}

/// Opaque handle of a pending frame request (`requestAnimationFrame` id on the web).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameToken(pub i32);

pub trait FrameScheduler {
    /// Ask for one callback on the next display refresh.
    fn request(&mut self) -> Option<FrameToken>;
    fn cancel(&mut self, token: FrameToken);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimatorState {
    Idle,
    Running,
    Stopped,
}

pub struct BackgroundAnimator<S, F, R> {
    surface: Option<S>,
    scheduler: F,
    params: FogParams,
    pattern: NoisePattern,
    rng: R,
    state: AnimatorState,
    pending: Option<FrameToken>,
    frames: u64,
}

impl<S: FogSurface, F: FrameScheduler, R: Rng> BackgroundAnimator<S, F, R> {
    pub fn new(scheduler: F, params: FogParams, rng: R) -> Self {
        Self {
            surface: None,
            scheduler,
            params,
            pattern: NoisePattern::new(),
            rng,
            state: AnimatorState::Idle,
            pending: None,
            frames: 0,
        }
    }

    /// Take ownership of `surface`, size it to `viewport` and schedule the
    /// first frame. Returns `false` without doing anything when the surface
    /// is absent or the animator was already started.
    pub fn start(&mut self, surface: Option<S>, viewport: SurfaceSize) -> bool {
        if self.state != AnimatorState::Idle {
            log::warn!("[fog] start ignored; animator is {:?}", self.state);
            return false;
        }
        let Some(mut surface) = surface else {
            log::debug!("[fog] no drawing surface; background disabled");
            return false;
        };
        surface.set_size(viewport);
        self.surface = Some(surface);
        self.state = AnimatorState::Running;
        self.pending = self.scheduler.request();
        log::info!(
            "[fog] started at {}x{}",
            viewport.width,
            viewport.height
        );
        true
    }

    /// Match the surface to a new viewport. Applied immediately, no debounce.
    pub fn resize(&mut self, viewport: SurfaceSize) {
        if let Some(surface) = self.surface.as_mut() {
            surface.set_size(viewport);
            log::debug!("[fog] resized to {}x{}", viewport.width, viewport.height);
        }
    }

    /// One redraw iteration, then schedule the next. A callback that fires
    /// after `stop` is ignored.
    pub fn frame(&mut self, elapsed: Duration) {
        if self.state != AnimatorState::Running {
            return;
        }
        self.pending = None;
        if let Some(surface) = self.surface.as_mut() {
            let size = surface.size();
            if !size.is_empty() {
                surface.fill_trail(self.params.trail);
                self.pattern
                    .regenerate(size, &self.params.noise, &mut self.rng);
                let plan = self.params.frame(size, elapsed);
                surface.draw_fog(&plan, &self.pattern);
            }
        }
        self.frames += 1;
        log::trace!("[fog] frame {}", self.frames);
        self.pending = self.scheduler.request();
    }

    /// Cancel the pending frame and end the loop. Safe to call repeatedly.
    pub fn stop(&mut self) {
        if let Some(token) = self.pending.take() {
            self.scheduler.cancel(token);
        }
        if self.state == AnimatorState::Running {
            log::info!("[fog] stopped after {} frames", self.frames);
        }
        self.state = AnimatorState::Stopped;
    }

    pub fn state(&self) -> AnimatorState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == AnimatorState::Running
    }

    pub fn pending(&self) -> Option<FrameToken> {
        self.pending
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn params(&self) -> &FogParams {
        &self.params
    }
}
