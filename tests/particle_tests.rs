// Host-side tests for particle bursts and the hover glow filter.
// A simulated clock stands in for the browser's timers.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use smoke_fx::core::*;
use std::time::Duration;

/// Particle host with a manual clock: particles live in `live` until their
/// removal deadline passes.
#[derive(Default)]
struct SimHost {
    now: Duration,
    next_id: usize,
    created: Vec<(usize, ParticleSpec, Duration)>,
    live: Vec<usize>,
    deadlines: Vec<(usize, Duration)>,
    refuse: bool,
}

impl SimHost {
    fn advance(&mut self, by: Duration) {
        self.now += by;
        let now = self.now;
        let expired: Vec<usize> = self
            .deadlines
            .iter()
            .filter(|(_, at)| *at <= now)
            .map(|(id, _)| *id)
            .collect();
        self.deadlines.retain(|(_, at)| *at > now);
        self.live.retain(|id| !expired.contains(id));
    }
}

impl ParticleHost for SimHost {
    type Handle = usize;

    fn insert(&mut self, spec: &ParticleSpec) -> Option<usize> {
        if self.refuse {
            return None;
        }
        self.next_id += 1;
        self.created.push((self.next_id, spec.clone(), self.now));
        self.live.push(self.next_id);
        Some(self.next_id)
    }

    fn remove_after(&mut self, handle: usize, delay: Duration) {
        self.deadlines.push((handle, self.now + delay));
    }
}

fn burster(seed: u64) -> ParticleBurster<StdRng> {
    ParticleBurster::new(BurstConfig::default(), StdRng::seed_from_u64(seed))
}

#[test]
fn trigger_center_from_bounding_box() {
    let rect = TriggerRect {
        left: 60.0,
        top: 80.0,
        width: 80.0,
        height: 40.0,
    };
    assert_eq!(rect.center(), Vec2::new(100.0, 100.0));
}

#[test]
fn burst_spawns_fixed_count() {
    let mut host = SimHost::default();
    let mut b = burster(1);
    assert_eq!(b.burst(&mut host, Vec2::new(100.0, 100.0)), 8);
    assert_eq!(host.created.len(), 8);
    assert_eq!(host.live.len(), 8);
    assert_eq!(host.deadlines.len(), 8);
}

#[test]
fn particles_land_inside_offset_box() {
    let center = Vec2::new(100.0, 100.0);
    let config = BurstConfig::default();
    let (lo, hi) = config.offset_bounds(center);
    assert_eq!(lo, Vec2::new(75.0, 85.0));
    assert_eq!(hi, Vec2::new(125.0, 115.0));

    for seed in 0..50 {
        let mut b = burster(seed);
        for spec in b.plan(center) {
            let p = spec.position;
            assert!(p.x >= lo.x && p.x <= hi.x, "x={} (seed {seed})", p.x);
            assert!(p.y >= lo.y && p.y <= hi.y, "y={} (seed {seed})", p.y);
        }
    }
}

#[test]
fn particle_attributes_respect_ranges() {
    let mut b = burster(99);
    let specs: Vec<ParticleSpec> = (0..20)
        .flat_map(|_| b.plan(Vec2::new(300.0, 200.0)))
        .collect();
    for s in &specs {
        assert!((8.0..=16.0).contains(&s.size_px));
        assert!((0.5..=0.8).contains(&s.opacity));
        let secs = s.animation.as_secs_f32();
        assert!((1.0..=2.5).contains(&secs), "duration {secs}");
    }
    // Independent draws: not every particle gets the same size
    let first = specs[0].size_px;
    assert!(specs.iter().any(|s| (s.size_px - first).abs() > 1e-3));
}

#[test]
fn every_particle_removed_by_removal_delay() {
    let mut host = SimHost::default();
    let mut b = burster(5);
    b.burst(&mut host, Vec2::new(100.0, 100.0));

    host.advance(Duration::from_millis(1999));
    assert_eq!(host.live.len(), 8);
    host.advance(Duration::from_millis(1));
    assert!(host.live.is_empty());
}

#[test]
fn repeated_bursts_do_not_accumulate() {
    let mut host = SimHost::default();
    let mut b = burster(8);
    for _ in 0..25 {
        b.burst(&mut host, Vec2::new(50.0, 50.0));
        host.advance(Duration::from_millis(250));
        // Bursts every 250ms with a 2000ms lifetime: at most 8 batches alive
        assert!(host.live.len() <= 8 * 8);
    }
    host.advance(Duration::from_millis(2000));
    assert!(host.live.is_empty());
    assert_eq!(host.created.len(), 25 * 8);
}

#[test]
fn refused_inserts_are_not_scheduled() {
    let mut host = SimHost {
        refuse: true,
        ..Default::default()
    };
    let mut b = burster(2);
    assert_eq!(b.burst(&mut host, Vec2::ZERO), 0);
    assert!(host.deadlines.is_empty());
}

#[test]
fn default_removal_cuts_longest_animations() {
    let config = BurstConfig::default();
    assert_eq!(config.removal_delay, Duration::from_millis(2000));
    assert_eq!(config.max_animation(), Duration::from_millis(2500));
    assert!(!config.removal_outlives_animation());

    let relaxed = BurstConfig {
        removal_delay: Duration::from_millis(3000),
        ..BurstConfig::default()
    };
    assert!(relaxed.removal_outlives_animation());
}

#[test]
fn style_properties_render_css() {
    let spec = ParticleSpec {
        position: Vec2::new(90.5, 101.0),
        size_px: 12.0,
        opacity: 0.6,
        animation: Duration::from_millis(1500),
    };
    let props = spec.style_properties();
    let get = |name: &str| props.iter().find(|(n, _)| *n == name).map(|(_, v)| v.clone());
    assert_eq!(get("left").as_deref(), Some("90.5px"));
    assert_eq!(get("top").as_deref(), Some("101px"));
    assert_eq!(get("animation-duration").as_deref(), Some("1.5s"));
    assert_eq!(get("background").as_deref(), Some("rgba(255, 255, 255, 0.6)"));
    assert_eq!(get("width"), get("height"));
    assert_eq!(get("width").as_deref(), Some("12px"));
}

#[test]
fn custom_count_is_honored() {
    let config = BurstConfig {
        count: 3,
        ..BurstConfig::default()
    };
    let mut b = ParticleBurster::new(config, StdRng::seed_from_u64(0));
    let mut host = SimHost::default();
    assert_eq!(b.burst(&mut host, Vec2::ZERO), 3);
}

#[test]
fn glow_enter_is_idempotent() {
    let applied: Vec<&str> = (0..3).map(|_| Hover::Enter.filter()).collect();
    assert!(applied.iter().all(|f| *f == GLOW_FILTER));
    assert_eq!(Hover::Leave.filter(), NO_FILTER);
    assert_eq!(NO_FILTER, "none");
}

#[test]
fn hover_event_names_round_trip() {
    for h in [Hover::Enter, Hover::Leave] {
        assert_eq!(Hover::from_event_type(h.event_type()), Some(h));
    }
    assert_eq!(Hover::from_event_type("click"), None);
}
