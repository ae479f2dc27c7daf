// Host-side tests for tuning constants and their relationships.

use smoke_fx::constants::*;
use smoke_fx::core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn page_contract_is_well_formed() {
    assert!(!SMOKE_CANVAS_ID.is_empty() && !SMOKE_CANVAS_ID.starts_with('#'));
    assert!(!NAV_BUTTON_ID.is_empty() && !NAV_BUTTON_ID.starts_with('#'));
    assert!(TRIGGER_SELECTOR.starts_with('.'));
    assert_eq!(&TRIGGER_SELECTOR[1..], "smoke-btn");
    assert!(!PARTICLE_CLASS.contains(' '));
    assert!(GLOW_SELECTOR.starts_with('[') && GLOW_SELECTOR.ends_with(']'));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn navigation_delay_is_short() {
    assert!(NAV_DELAY_MS > 0);
    assert!((NAV_DELAY_MS as u64) < PARTICLE_REMOVAL_DELAY_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ranges_are_ordered() {
    for [lo, hi] in [
        PARTICLE_DURATION_SEC,
        PARTICLE_SIZE_PX,
        PARTICLE_OPACITY,
        NOISE_COLOR_JITTER,
        NOISE_ALPHA_JITTER,
    ] {
        assert!(lo <= hi, "range [{lo}, {hi}]");
        assert!(lo >= 0.0);
    }
    assert!(PARTICLE_OPACITY[1] <= 1.0);
    assert!(BURST_COUNT > 0);
    assert!(BURST_SPREAD_PX.iter().all(|s| *s >= 0.0));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn fog_layer_stays_translucent() {
    assert!(TRAIL_FILL.a > 0.0 && TRAIL_FILL.a < 0.5);
    assert!(PATTERN_ALPHA > 0.0 && PATTERN_ALPHA < 1.0);
    assert!(NOISE_CORE_ALPHA <= 1.0);
    assert!(DRIFT_PERIOD_MS > 0.0);
    assert!(TINT_STOPS.windows(2).all(|w| w[0].offset < w[1].offset));
    assert!(TINT_STOPS.iter().all(|s| (0.0..=1.0).contains(&s.offset)));
}
