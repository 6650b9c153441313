//! Vector math for the orb renderer.
//!
//! Thin layer over `glam`'s double-precision vectors plus the handful of
//! optical helpers every material needs.

// Re-export glam for convenience
pub use glam::DVec3;

mod interval;
pub use interval::Interval;

/// 3-component double-precision vector.
pub type Vec3 = DVec3;

/// A position in world space.
pub type Point3 = DVec3;

/// Threshold below which every component counts as zero.
const NEAR_ZERO_EPS: f64 = 1e-8;

/// Returns true if the vector is close to zero in all dimensions.
#[inline]
pub fn near_zero(v: Vec3) -> bool {
    v.x.abs() < NEAR_ZERO_EPS && v.y.abs() < NEAR_ZERO_EPS && v.z.abs() < NEAR_ZERO_EPS
}

/// Reflect `v` about the normal `n`.
///
/// `n` must be unit length.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract the unit vector `uv` through a surface with normal `n`.
///
/// `etai_over_etat` is the ratio of refraction indices across the boundary.
#[inline]
pub fn refract(uv: Vec3, n: Vec3, etai_over_etat: f64) -> Vec3 {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}
