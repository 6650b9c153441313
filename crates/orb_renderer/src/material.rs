//! Surface materials and how they scatter light.
//!
//! The material set is closed, so it is an enum with a single `scatter`
//! dispatch instead of a trait object.

use orb_math::{near_zero, reflect, refract, Vec3};
use rand::RngCore;

use crate::sampling::{gen_f64, random_in_unit_sphere, random_unit_vector};
use crate::{HitRecord, Ray};

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Outcome of a ray scattering off a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterResult {
    /// Fraction of light carried by the scattered ray, per channel
    pub attenuation: Color,
    /// The outgoing ray
    pub scattered: Ray,
}

/// How light interacts with a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Diffuse surface.
    Lambertian {
        /// Surface color, each channel in [0, 1]
        albedo: Color,
    },

    /// Specular reflector.
    Metal {
        /// Tint of the reflection
        albedo: Color,
        /// Roughness in [0, 1]; 0 is a perfect mirror
        fuzz: f64,
    },

    /// Clear refractive material such as glass or water.
    Dielectric {
        /// Index of refraction (1.0 = air, 1.5 = glass, 2.4 = diamond)
        refraction_index: f64,
    },
}

impl Material {
    /// Create a diffuse material.
    pub fn lambertian(albedo: Color) -> Self {
        Material::Lambertian { albedo }
    }

    /// Create a metal material; `fuzz` is clamped to [0, 1].
    pub fn metal(albedo: Color, fuzz: f64) -> Self {
        Material::Metal {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }

    /// Create a dielectric with the given index of refraction.
    pub fn dielectric(refraction_index: f64) -> Self {
        Material::Dielectric { refraction_index }
    }

    /// Scatter an incoming ray.
    ///
    /// Returns `None` if the ray is absorbed.
    pub fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        match *self {
            Material::Lambertian { albedo } => Some(scatter_lambertian(albedo, rec, rng)),
            Material::Metal { albedo, fuzz } => scatter_metal(albedo, fuzz, ray_in, rec, rng),
            Material::Dielectric { refraction_index } => {
                Some(scatter_dielectric(refraction_index, ray_in, rec, rng))
            }
        }
    }
}

fn scatter_lambertian(albedo: Color, rec: &HitRecord, rng: &mut dyn RngCore) -> ScatterResult {
    let direction = diffuse_direction(rec.normal, random_unit_vector(rng));
    ScatterResult {
        attenuation: albedo,
        scattered: Ray::new(rec.p, direction),
    }
}

/// Offset the normal by a random unit vector, falling back to the normal
/// when the two nearly cancel.
fn diffuse_direction(normal: Vec3, random_unit: Vec3) -> Vec3 {
    let direction = normal + random_unit;
    if near_zero(direction) {
        normal
    } else {
        direction
    }
}

fn scatter_metal(
    albedo: Color,
    fuzz: f64,
    ray_in: &Ray,
    rec: &HitRecord,
    rng: &mut dyn RngCore,
) -> Option<ScatterResult> {
    let reflected = reflect(ray_in.direction().normalize(), rec.normal);
    let direction = if fuzz > 0.0 {
        reflected + fuzz * random_in_unit_sphere(rng)
    } else {
        reflected
    };

    // Fuzzed below the surface: absorbed
    if direction.dot(rec.normal) <= 0.0 {
        return None;
    }

    Some(ScatterResult {
        attenuation: albedo,
        scattered: Ray::new(rec.p, direction),
    })
}

fn scatter_dielectric(
    refraction_index: f64,
    ray_in: &Ray,
    rec: &HitRecord,
    rng: &mut dyn RngCore,
) -> ScatterResult {
    let ratio = if rec.front_face {
        1.0 / refraction_index
    } else {
        refraction_index
    };

    let unit_direction = ray_in.direction().normalize();
    let cos_theta = (-unit_direction).dot(rec.normal).min(1.0);
    let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

    let cannot_refract = ratio * sin_theta > 1.0;

    let direction = if cannot_refract || reflectance(cos_theta, ratio) > gen_f64(rng) {
        reflect(unit_direction, rec.normal)
    } else {
        refract(unit_direction, rec.normal, ratio)
    };

    ScatterResult {
        attenuation: Color::ONE,
        scattered: Ray::new(rec.p, direction),
    }
}

/// Schlick's approximation for reflectance.
fn reflectance(cosine: f64, ratio: f64) -> f64 {
    let r0 = ((1.0 - ratio) / (1.0 + ratio)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}
