use super::noise::NoiseParams;
use super::surface::{ColorStop, Rgba, SurfaceSize};
use glam::Vec2;
use std::time::Duration;

// Fading-trail overlay drawn over the previous frame
pub const TRAIL_FILL: Rgba = Rgba::new(0, 0, 0, 0.05);

// Fog tint, bottom (offset 0) to top (offset 1)
pub const TINT_STOPS: [ColorStop; 3] = [
    ColorStop::new(0.0, Rgba::new(50, 50, 50, 0.1)),
    ColorStop::new(0.3, Rgba::new(80, 80, 80, 0.08)),
    ColorStop::new(1.0, Rgba::new(120, 120, 120, 0.01)),
];

// Drift: t = elapsed_ms / DRIFT_PERIOD_MS, offset = (sin(t*fx), cos(t*fy)) * size * amplitude
pub const DRIFT_PERIOD_MS: f64 = 4000.0;
pub const DRIFT_FREQ: [f32; 2] = [0.7, 0.5];
pub const DRIFT_AMPLITUDE: f32 = 0.05;
pub const DRIFT_LIFT: f32 = 0.1; // fraction of height the fog sits above the origin

pub const PATTERN_ALPHA: f32 = 0.15;
pub const FOG_COMPOSITE: &str = "lighter";

/// Tuning for one fog layer. `Default` reproduces the dashboard look.
#[derive(Clone, Debug, PartialEq)]
pub struct FogParams {
    pub trail: Rgba,
    pub tint: [ColorStop; 3],
    pub drift_period_ms: f64,
    pub drift_freq: Vec2,
    pub drift_amplitude: f32,
    pub drift_lift: f32,
    pub pattern_alpha: f32,
    pub noise: NoiseParams,
}

impl Default for FogParams {
    fn default() -> Self {
        Self {
            trail: TRAIL_FILL,
            tint: TINT_STOPS,
            drift_period_ms: DRIFT_PERIOD_MS,
            drift_freq: Vec2::from_array(DRIFT_FREQ),
            drift_amplitude: DRIFT_AMPLITUDE,
            drift_lift: DRIFT_LIFT,
            pattern_alpha: PATTERN_ALPHA,
            noise: NoiseParams::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: [ColorStop; 3],
}

/// Draw plan for the additive fog pass of a single frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FogFrame {
    pub size: SurfaceSize,
    pub composite: &'static str,
    pub drift: Vec2,
    pub gradient: LinearGradient,
    pub pattern_alpha: f32,
}

impl FogParams {
    /// Origin translation at `elapsed`. Bounded by `amplitude * size` around
    /// `(0, -lift * height)`.
    pub fn drift(&self, size: SurfaceSize, elapsed: Duration) -> Vec2 {
        let t = (elapsed.as_secs_f64() * 1000.0 / self.drift_period_ms) as f32;
        let dims = size.as_vec2();
        Vec2::new(
            (t * self.drift_freq.x).sin() * dims.x * self.drift_amplitude,
            (t * self.drift_freq.y).cos() * dims.y * self.drift_amplitude
                - dims.y * self.drift_lift,
        )
    }

    /// Vertical tint gradient running from the bottom edge up to the top.
    pub fn tint_gradient(&self, size: SurfaceSize) -> LinearGradient {
        LinearGradient {
            start: Vec2::new(0.0, size.height as f32),
            end: Vec2::ZERO,
            stops: self.tint,
        }
    }

    pub fn frame(&self, size: SurfaceSize, elapsed: Duration) -> FogFrame {
        FogFrame {
            size,
            composite: FOG_COMPOSITE,
            drift: self.drift(size, elapsed),
            gradient: self.tint_gradient(size),
            pattern_alpha: self.pattern_alpha,
        }
    }
}
