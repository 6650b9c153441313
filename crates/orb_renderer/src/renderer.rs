//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Iterative bounce loop with a configurable depth budget
//! - Anti-aliasing via jittered multi-sampling
//! - Gamma correction
//! - Row-parallel rendering with rayon

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Instant;

use orb_math::Interval;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;

use crate::sampling::gen_f64;
use crate::{Camera, Color, ConfigError, Hittable, Ray, RenderError};

/// Lower bound of the hit window; keeps bounced rays off their own surface.
const SHADOW_ACNE_EPSILON: f64 = 0.001;

/// Mixed into the base seed so row streams never replay the scene layout draws.
const ROW_SEED_STREAM: u64 = 0x5851_F42D_4C95_7F2D;

/// Output intensity window before scaling to a byte.
const INTENSITY: Interval = Interval::new(0.0, 0.999);

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Output width in pixels
    pub image_width: u32,
    /// Output height in pixels
    pub image_height: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Base seed for per-row generators; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl RenderConfig {
    /// Build a configuration with the height derived from `aspect_ratio`.
    pub fn new(
        image_width: u32,
        aspect_ratio: f64,
        samples_per_pixel: u32,
        max_depth: u32,
    ) -> Result<Self, ConfigError> {
        if !(aspect_ratio.is_finite() && aspect_ratio > 0.0) {
            return Err(ConfigError::InvalidAspectRatio(aspect_ratio));
        }
        let image_height = ((image_width as f64 / aspect_ratio) as u32).max(1);

        let config = Self {
            image_width,
            image_height,
            samples_per_pixel,
            max_depth,
            seed: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Set a fixed base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that every dimension and count is at least one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.image_width == 0 || self.image_height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.image_width,
                height: self.image_height,
            });
        }
        if self.samples_per_pixel == 0 {
            return Err(ConfigError::ZeroSamples);
        }
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(())
    }

    /// Width over height of the output image.
    pub fn aspect_ratio(&self) -> f64 {
        self.image_width as f64 / self.image_height as f64
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_width: 1200,
            image_height: 675,
            samples_per_pixel: 500,
            max_depth: 50,
            seed: None,
        }
    }
}

/// Compute the color seen by a ray.
///
/// Follows a single path through the scene, multiplying in each surface's
/// attenuation, until it escapes to the sky, is absorbed, or runs out of
/// bounces. Exhausting the budget yields black.
pub fn ray_color(
    ray: &Ray,
    world: &dyn Hittable,
    max_depth: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let mut throughput = Color::ONE;
    let mut current = *ray;

    for _ in 0..max_depth {
        let Some(rec) = world.hit(&current, Interval::new(SHADOW_ACNE_EPSILON, f64::INFINITY))
        else {
            return throughput * sky_gradient(&current);
        };

        match rec.material.scatter(&current, &rec, rng) {
            Some(result) => {
                throughput *= result.attenuation;
                current = result.scattered;
            }
            // Absorbed
            None => return Color::ZERO,
        }
    }

    Color::ZERO
}

/// Sky color: white at the horizon blending to blue at the zenith.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    white * (1.0 - a) + blue * a
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f64) -> f64 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert a sum of `samples` linear colors to gamma-corrected RGB bytes.
pub fn write_color(pixel_color: Color, samples: u32) -> [u8; 3] {
    let scaled = pixel_color / samples as f64;
    let to_byte = |c: f64| (256.0 * INTENSITY.clamp(linear_to_gamma(c))) as u8;
    [to_byte(scaled.x), to_byte(scaled.y), to_byte(scaled.z)]
}

/// Render a single pixel with multi-sampling.
///
/// `(x, y)` are buffer coordinates with `y = 0` the top row. Returns the
/// sum of all samples, not the average.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let width = config.image_width as f64;
    let height = config.image_height as f64;
    // Camera coordinates grow upward
    let row_from_bottom = (config.image_height - 1 - y) as f64;

    let mut pixel_color = Color::ZERO;
    for _ in 0..config.samples_per_pixel {
        let s = (x as f64 + gen_f64(rng)) / width;
        let t = (row_from_bottom + gen_f64(rng)) / height;
        let ray = camera.get_ray(s, t, rng);
        pixel_color += ray_color(&ray, world, config.max_depth, rng);
    }

    pixel_color
}

/// Gamma-corrected RGB image, 3 bytes per pixel, row-major, top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Bytes per pixel.
    pub const CHANNELS: usize = 3;

    /// Create a new buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * Self::CHANNELS],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the pixel at (x, y).
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let start = (y as usize * self.width as usize + x as usize) * Self::CHANNELS;
        [self.data[start], self.data[start + 1], self.data[start + 2]]
    }

    /// Raw bytes, ready for an encoder.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    fn row_stride(&self) -> usize {
        self.width as usize * Self::CHANNELS
    }
}

/// Render the entire scene, in parallel across rows.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
) -> Result<PixelBuffer, RenderError> {
    render_with_cancel(camera, world, config, &AtomicBool::new(false))
}

/// Render the entire scene, checking `cancel` before each row.
///
/// Rows already claimed by a worker finish; no new rows start once the flag
/// is set.
pub fn render_with_cancel(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    cancel: &AtomicBool,
) -> Result<PixelBuffer, RenderError> {
    config.validate()?;

    log::info!(
        "Rendering {}x{} @ {} spp, max depth {}",
        config.image_width,
        config.image_height,
        config.samples_per_pixel,
        config.max_depth
    );
    let start = Instant::now();

    let mut image = PixelBuffer::new(config.image_width, config.image_height);
    let stride = image.row_stride();
    let rows_total = config.image_height as usize;
    let rows_done = AtomicUsize::new(0);
    let progress_step = (rows_total / 10).max(1);

    image
        .data
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| {
            if cancel.load(Ordering::Relaxed) {
                return;
            }
            log::trace!("Working on row {}", y);

            let mut rng = row_rng(config.seed, y);
            for (x, out) in row.chunks_exact_mut(PixelBuffer::CHANNELS).enumerate() {
                let color = render_pixel(camera, world, x as u32, y as u32, config, &mut rng);
                out.copy_from_slice(&write_color(color, config.samples_per_pixel));
            }

            let done = rows_done.fetch_add(1, Ordering::Relaxed) + 1;
            if done % progress_step == 0 {
                log::debug!("{}/{} rows done", done, rows_total);
            }
        });

    let rows_done = rows_done.into_inner();
    if rows_done < rows_total {
        log::warn!("Render cancelled after {}/{} rows", rows_done, rows_total);
        return Err(RenderError::Cancelled {
            rows_done,
            rows_total,
        });
    }

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(image)
}

/// Independent generator for one row.
fn row_rng(seed: Option<u64>, row: usize) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64((seed ^ ROW_SEED_STREAM).wrapping_add(row as u64)),
        None => StdRng::from_entropy(),
    }
}
