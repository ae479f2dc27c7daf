//! Host page contract: element ids, selectors and class names the effects
//! look for, plus the page-level timing constants.
//!
//! Particle and fog tuning lives with the logic in `core`.

// Fog background canvas
pub const SMOKE_CANVAS_ID: &str = "smokeCanvas";

// Particle bursts
pub const TRIGGER_SELECTOR: &str = ".smoke-btn";
pub const PARTICLE_CLASS: &str = "smoke-particle";

// Hover glow
pub const GLOW_SELECTOR: &str = "[data-hover=\"glow\"]";

// Navigation button whose click is held back before following its href
pub const NAV_BUTTON_ID: &str = "estoque-btn";
pub const NAV_DELAY_MS: i32 = 500;
