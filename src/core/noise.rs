use super::surface::SurfaceSize;
use rand::Rng;

// Radial falloff: alpha at the centre, fading to zero at max(w, h) / 2
pub const NOISE_CORE_ALPHA: f32 = 0.8;

// Per-pixel multiplicative jitter ranges [min, max)
pub const NOISE_COLOR_JITTER: [f32; 2] = [0.9, 1.1];
pub const NOISE_ALPHA_JITTER: [f32; 2] = [0.8, 1.2];

#[derive(Clone, Debug, PartialEq)]
pub struct NoiseParams {
    pub core_alpha: f32,
    pub color_jitter: [f32; 2],
    pub alpha_jitter: [f32; 2],
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            core_alpha: NOISE_CORE_ALPHA,
            color_jitter: NOISE_COLOR_JITTER,
            alpha_jitter: NOISE_ALPHA_JITTER,
        }
    }
}

/// Off-screen RGBA8 raster holding one frame's worth of smoke noise.
///
/// The pixel layout matches `ImageData` (row-major, straight alpha), so the
/// web layer can hand `pixels()` to `putImageData` without conversion. The
/// allocation is kept between frames; the contents are rebuilt on every
/// `regenerate` call.
#[derive(Clone, Debug, Default)]
pub struct NoisePattern {
    size: SurfaceSize,
    pixels: Vec<u8>,
}

impl NoisePattern {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA of the pixel at (x, y), or `None` outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        let i = (y as usize * self.size.width as usize + x as usize) * 4;
        let p = &self.pixels[i..i + 4];
        Some([p[0], p[1], p[2], p[3]])
    }

    /// Rebuild the pattern at `size`: a white radial gradient with every
    /// channel of every pixel scaled by a fresh random factor.
    pub fn regenerate<R: Rng + ?Sized>(
        &mut self,
        size: SurfaceSize,
        params: &NoiseParams,
        rng: &mut R,
    ) {
        self.size = size;
        self.pixels.resize(size.pixel_count() * 4, 0);
        if size.is_empty() {
            return;
        }

        let center = size.center();
        let radius = (size.width.max(size.height) as f32 / 2.0).max(f32::EPSILON);
        let [c_lo, c_hi] = params.color_jitter;
        let [a_lo, a_hi] = params.alpha_jitter;

        for (idx, px) in self.pixels.chunks_exact_mut(4).enumerate() {
            let x = (idx % size.width as usize) as f32 + 0.5;
            let y = (idx / size.width as usize) as f32 + 0.5;
            let t = (glam::Vec2::new(x, y).distance(center) / radius).min(1.0);
            let alpha = params.core_alpha * (1.0 - t);
            // Fully transparent pixels read back as black from a canvas
            let (base_rgb, base_a) = if alpha > 0.0 {
                (255.0, alpha * 255.0)
            } else {
                (0.0, 0.0)
            };

            px[0] = jitter(base_rgb, c_lo, c_hi, rng);
            px[1] = jitter(base_rgb, c_lo, c_hi, rng);
            px[2] = jitter(base_rgb, c_lo, c_hi, rng);
            px[3] = jitter(base_a, a_lo, a_hi, rng);
        }
    }
}

#[inline]
fn jitter<R: Rng + ?Sized>(value: f32, lo: f32, hi: f32, rng: &mut R) -> u8 {
    let factor = lo + rng.gen::<f32>() * (hi - lo);
    (value * factor).round().clamp(0.0, 255.0) as u8
}
