//! Thin-lens camera for ray generation.

use crate::sampling::random_in_unit_disk;
use crate::{ConfigError, Ray};
use orb_math::{Point3, Vec3};
use rand::RngCore;

/// Camera placement and lens settings.
///
/// Collects the construction parameters; [`CameraBuilder::build`] derives
/// the immutable [`Camera`] from them.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraBuilder {
    look_from: Point3,
    look_at: Point3,
    vup: Vec3,
    vfov: f64,         // Vertical field of view in degrees
    aperture: f64,     // Lens diameter
    focus_dist: f64,   // Distance from camera to plane of perfect focus
    aspect_ratio: f64, // Image width / height
}

impl CameraBuilder {
    /// Create a builder with the default view of the demo scenes.
    pub fn new() -> Self {
        Self {
            look_from: Point3::new(13.0, 2.0, 3.0),
            look_at: Point3::ZERO,
            vup: Vec3::Y,
            vfov: 90.0,
            aperture: 0.1,
            focus_dist: 10.0,
            aspect_ratio: 16.0 / 9.0,
        }
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Point3, look_at: Point3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, vfov: f64, aperture: f64, focus_dist: f64) -> Self {
        self.vfov = vfov;
        self.aperture = aperture;
        self.focus_dist = focus_dist;
        self
    }

    /// Set the image aspect ratio (width / height).
    pub fn with_aspect_ratio(mut self, aspect_ratio: f64) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    /// Validate the settings and derive the camera.
    pub fn build(&self) -> Result<Camera, ConfigError> {
        if !(self.vfov > 0.0 && self.vfov < 180.0) {
            return Err(ConfigError::InvalidFieldOfView(self.vfov));
        }
        if !(self.aperture.is_finite() && self.aperture >= 0.0) {
            return Err(ConfigError::InvalidAperture(self.aperture));
        }
        if !(self.focus_dist.is_finite() && self.focus_dist > 0.0) {
            return Err(ConfigError::InvalidFocusDistance(self.focus_dist));
        }
        if !(self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0) {
            return Err(ConfigError::InvalidAspectRatio(self.aspect_ratio));
        }

        let view = self.look_from - self.look_at;
        if view.length_squared() == 0.0 || !view.is_finite() {
            return Err(ConfigError::DegenerateView);
        }

        // Calculate camera basis vectors
        let w = view.normalize();
        let side = self.vup.cross(w);
        if !side.is_finite() || side.length_squared() < 1e-12 {
            return Err(ConfigError::DegenerateUpVector);
        }
        let u = side.normalize();
        let v = w.cross(u);

        // Calculate viewport dimensions
        let theta = self.vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = self.aspect_ratio * viewport_height;

        let origin = self.look_from;
        let horizontal = self.focus_dist * viewport_width * u;
        let vertical = self.focus_dist * viewport_height * v;
        let lower_left_corner = origin - horizontal / 2.0 - vertical / 2.0 - self.focus_dist * w;

        Ok(Camera {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
            u,
            v,
            lens_radius: self.aperture / 2.0,
        })
    }
}

impl Default for CameraBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Camera for generating rays into the scene.
///
/// Immutable once built, so one instance is shared by every render worker.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    origin: Point3,
    lower_left_corner: Point3,
    horizontal: Vec3,
    vertical: Vec3,
    // Right and up basis vectors, used to place lens samples
    u: Vec3,
    v: Vec3,
    lens_radius: f64,
}

impl Camera {
    /// Start configuring a camera.
    pub fn builder() -> CameraBuilder {
        CameraBuilder::new()
    }

    /// Generate a ray through normalized image coordinates `(s, t)`.
    ///
    /// `(0, 0)` is the lower-left corner of the focus plane and `(1, 1)` the
    /// upper-right. The origin is jittered across the lens disk, so objects
    /// off the focus plane blur.
    pub fn get_ray(&self, s: f64, t: f64, rng: &mut dyn RngCore) -> Ray {
        let offset = if self.lens_radius > 0.0 {
            let rd = self.lens_radius * random_in_unit_disk(rng);
            self.u * rd.x + self.v * rd.y
        } else {
            Vec3::ZERO
        };

        let ray_origin = self.origin + offset;
        let target = self.lower_left_corner + s * self.horizontal + t * self.vertical;
        Ray::new(ray_origin, target - ray_origin)
    }

    /// Get the lens radius (half the aperture).
    pub fn lens_radius(&self) -> f64 {
        self.lens_radius
    }

    /// Get the camera position.
    pub fn origin(&self) -> Point3 {
        self.origin
    }
}
