//! Orb - CPU path tracing for sphere scenes
//!
//! A Monte Carlo path tracer: jittered camera rays bounce off diffuse,
//! metal and glass spheres until they escape to the sky, and the samples
//! are averaged into an 8-bit RGB image. Rows render in parallel.

mod camera;
mod error;
mod hittable;
mod material;
mod output;
mod ray;
mod renderer;
pub mod sampling;
mod scene;
mod sphere;

pub use camera::{Camera, CameraBuilder};
pub use error::{ConfigError, RenderError};
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{Color, Material, ScatterResult};
pub use output::save_png;
pub use ray::Ray;
pub use renderer::{
    linear_to_gamma, ray_color, render, render_pixel, render_with_cancel, sky_gradient,
    write_color, PixelBuffer, RenderConfig,
};
pub use scene::{cover_scene, scene_rng, showcase_scene, SceneKind};
pub use sphere::Sphere;

/// Re-export Vec3 and common math types from orb_math
pub use orb_math::{Interval, Point3, Vec3};
