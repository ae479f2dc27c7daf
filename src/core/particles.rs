use glam::Vec2;
use rand::Rng;
use std::time::Duration;

// Burst shape
pub const BURST_COUNT: usize = 8;
pub const BURST_SPREAD_PX: [f32; 2] = [50.0, 30.0]; // full width/height of the offset box

// Per-particle ranges [min, max)
pub const PARTICLE_DURATION_SEC: [f32; 2] = [1.0, 2.5];
pub const PARTICLE_SIZE_PX: [f32; 2] = [8.0, 16.0];
pub const PARTICLE_OPACITY: [f32; 2] = [0.5, 0.8];

pub const PARTICLE_REMOVAL_DELAY_MS: u64 = 2000;

#[derive(Clone, Debug, PartialEq)]
pub struct BurstConfig {
    pub count: usize,
    pub spread: Vec2,
    pub duration_sec: [f32; 2],
    pub size_px: [f32; 2],
    pub opacity: [f32; 2],
    pub removal_delay: Duration,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            count: BURST_COUNT,
            spread: Vec2::from_array(BURST_SPREAD_PX),
            duration_sec: PARTICLE_DURATION_SEC,
            size_px: PARTICLE_SIZE_PX,
            opacity: PARTICLE_OPACITY,
            removal_delay: Duration::from_millis(PARTICLE_REMOVAL_DELAY_MS),
        }
    }
}

impl BurstConfig {
    /// Longest animation a particle can be given.
    pub fn max_animation(&self) -> Duration {
        Duration::from_secs_f32(self.duration_sec[1].max(0.0))
    }

    /// Whether removal always waits for the animation to finish. The default
    /// config does not: removal cuts animations longer than 2s short.
    pub fn removal_outlives_animation(&self) -> bool {
        self.removal_delay >= self.max_animation()
    }

    /// Offset box around the burst centre: (min corner, max corner).
    pub fn offset_bounds(&self, center: Vec2) -> (Vec2, Vec2) {
        let half = self.spread / 2.0;
        (center - half, center + half)
    }
}

/// Screen-space rectangle of a trigger element (`getBoundingClientRect`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TriggerRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl TriggerRect {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// One particle, fully resolved: where it sits and how it looks.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleSpec {
    /// Top-left corner in viewport pixels (`left` / `top`).
    pub position: Vec2,
    pub size_px: f32,
    pub opacity: f32,
    pub animation: Duration,
}

impl ParticleSpec {
    pub fn random<R: Rng + ?Sized>(center: Vec2, config: &BurstConfig, rng: &mut R) -> Self {
        let offset = Vec2::new(
            (rng.gen::<f32>() - 0.5) * config.spread.x,
            (rng.gen::<f32>() - 0.5) * config.spread.y,
        );
        let animation_sec = lerp(config.duration_sec, rng.gen::<f32>());
        let size_px = lerp(config.size_px, rng.gen::<f32>());
        let opacity = lerp(config.opacity, rng.gen::<f32>());
        Self {
            position: center + offset,
            size_px,
            opacity,
            animation: Duration::from_secs_f32(animation_sec.max(0.0)),
        }
    }

    /// Inline CSS properties for the particle element.
    pub fn style_properties(&self) -> [(&'static str, String); 6] {
        let size = format!("{}px", self.size_px);
        [
            ("left", format!("{}px", self.position.x)),
            ("top", format!("{}px", self.position.y)),
            (
                "animation-duration",
                format!("{}s", self.animation.as_secs_f32()),
            ),
            ("background", format!("rgba(255, 255, 255, {})", self.opacity)),
            ("width", size.clone()),
            ("height", size),
        ]
    }
}

#[inline]
fn lerp(range: [f32; 2], t: f32) -> f32 {
    range[0] + (range[1] - range[0]) * t
}

/// Where particles live: the document on the web, a recorder in tests.
pub trait ParticleHost {
    type Handle;

    /// Insert a particle; `None` when the host could not create it.
    fn insert(&mut self, spec: &ParticleSpec) -> Option<Self::Handle>;
    /// Remove `handle` once `delay` has elapsed.
    fn remove_after(&mut self, handle: Self::Handle, delay: Duration);
}

pub struct ParticleBurster<R> {
    config: BurstConfig,
    rng: R,
}

impl<R: Rng> ParticleBurster<R> {
    pub fn new(config: BurstConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &BurstConfig {
        &self.config
    }

    /// Plan a batch around `center` without inserting anything.
    pub fn plan(&mut self, center: Vec2) -> Vec<ParticleSpec> {
        (0..self.config.count)
            .map(|_| ParticleSpec::random(center, &self.config, &mut self.rng))
            .collect()
    }

    /// Spawn one batch into `host`, each particle scheduled for removal.
    /// Returns how many particles were inserted.
    pub fn burst<H: ParticleHost>(&mut self, host: &mut H, center: Vec2) -> usize {
        let mut inserted = 0;
        for spec in self.plan(center) {
            let Some(handle) = host.insert(&spec) else {
                continue;
            };
            host.remove_after(handle, self.config.removal_delay);
            inserted += 1;
        }
        log::debug!(
            "[burst] {} particles at ({:.1}, {:.1})",
            inserted,
            center.x,
            center.y
        );
        inserted
    }
}
