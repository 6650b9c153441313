//! Demo scenes.
//!
//! Every sphere owns its material by value, so a scene is just a
//! [`HittableList`] and needs no separate material store.

use orb_math::Point3;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::sampling::{gen_f64, gen_range, random_color, random_color_range};
use crate::{Color, ConfigError, HittableList, Material, Sphere};

/// Mixed into the base seed so scene layout has its own random stream.
const SCENE_SEED_STREAM: u64 = 0x9E37_79B9_7F4A_7C15;

/// Small spheres keep this far from the metal feature sphere.
const CLEARING_CENTER: Point3 = Point3::new(4.0, 0.2, 0.0);
const CLEARING_RADIUS: f64 = 0.9;

/// Which built-in scene to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SceneKind {
    /// Ground, three feature spheres and a field of small random spheres.
    #[default]
    Cover,
    /// Ground and the three feature spheres only.
    Showcase,
}

impl SceneKind {
    /// Build the scene, drawing any randomness from `rng`.
    pub fn build(self, rng: &mut dyn RngCore) -> Result<HittableList, ConfigError> {
        let world = match self {
            SceneKind::Cover => cover_scene(rng)?,
            SceneKind::Showcase => showcase_scene()?,
        };
        log::debug!("Built {:?} scene with {} objects", self, world.len());
        Ok(world)
    }
}

/// Generator for scene construction; `None` draws from OS entropy.
pub fn scene_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed ^ SCENE_SEED_STREAM),
        None => StdRng::from_entropy(),
    }
}

/// Ground, a 22x22 grid of small randomized spheres, and three feature
/// spheres (glass, diffuse, metal).
pub fn cover_scene(rng: &mut dyn RngCore) -> Result<HittableList, ConfigError> {
    Ok(into_list(cover_spheres(rng)?))
}

/// Ground and the three feature spheres only.
pub fn showcase_scene() -> Result<HittableList, ConfigError> {
    let mut spheres = vec![ground()?];
    spheres.extend(feature_spheres()?);
    Ok(into_list(spheres))
}

fn cover_spheres(rng: &mut dyn RngCore) -> Result<Vec<Sphere>, ConfigError> {
    let mut spheres = vec![ground()?];

    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = gen_f64(rng);
            let center = Point3::new(
                a as f64 + 0.9 * gen_f64(rng),
                0.2,
                b as f64 + 0.9 * gen_f64(rng),
            );

            if (center - CLEARING_CENTER).length() <= CLEARING_RADIUS {
                continue;
            }

            let material = if choose_mat < 0.8 {
                Material::lambertian(random_color(rng) * random_color(rng))
            } else if choose_mat < 0.95 {
                let albedo = random_color_range(rng, 0.5, 1.0);
                let fuzz = gen_range(rng, 0.0, 0.5);
                Material::metal(albedo, fuzz)
            } else {
                Material::dielectric(1.5)
            };

            spheres.push(Sphere::new(center, 0.2, material)?);
        }
    }

    spheres.extend(feature_spheres()?);
    Ok(spheres)
}

fn into_list(spheres: Vec<Sphere>) -> HittableList {
    let mut world = HittableList::new();
    for sphere in spheres {
        world.add(sphere);
    }
    world
}

fn ground() -> Result<Sphere, ConfigError> {
    Sphere::new(
        Point3::new(0.0, -1000.0, 0.0),
        1000.0,
        Material::lambertian(Color::new(0.5, 0.5, 0.5)),
    )
}

fn feature_spheres() -> Result<[Sphere; 3], ConfigError> {
    Ok([
        Sphere::new(Point3::new(0.0, 1.0, 0.0), 1.0, Material::dielectric(1.5))?,
        Sphere::new(
            Point3::new(-4.0, 1.0, 0.0),
            1.0,
            Material::lambertian(Color::new(0.4, 0.2, 0.1)),
        )?,
        Sphere::new(
            Point3::new(4.0, 1.0, 0.0),
            1.0,
            Material::metal(Color::new(0.7, 0.6, 0.5), 0.0),
        )?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Hittable, Ray};
    use orb_math::{Interval, Vec3};

    #[test]
    fn test_showcase_scene() {
        let world = showcase_scene().expect("valid scene");
        assert_eq!(world.len(), 4);

        // Straight down from above the glass sphere
        let ray = Ray::new(Point3::new(0.0, 5.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let rec = world
            .hit(&ray, Interval::new(0.001, f64::INFINITY))
            .expect("glass sphere below");
        assert!((rec.t - 3.0).abs() < 1e-9);
        assert_eq!(*rec.material, Material::dielectric(1.5));
    }

    #[test]
    fn test_cover_scene_size() {
        let mut rng = scene_rng(Some(42));
        let world = cover_scene(&mut rng).expect("valid scene");

        // Ground + 3 features + at most 22x22 small spheres, a few of which
        // fall in the clearing
        assert!(world.len() > 4 + 22 * 22 - 10);
        assert!(world.len() <= 4 + 22 * 22);
    }

    #[test]
    fn test_cover_scene_layout() {
        let mut rng = scene_rng(Some(42));
        let spheres = cover_spheres(&mut rng).expect("valid scene");
        let (ground_sphere, rest) = spheres.split_first().expect("ground first");
        let (small, features) = rest.split_at(rest.len() - 3);

        assert_eq!(ground_sphere.center(), Point3::new(0.0, -1000.0, 0.0));
        assert_eq!(ground_sphere.radius(), 1000.0);
        assert_eq!(
            *ground_sphere.material(),
            Material::lambertian(Color::splat(0.5))
        );

        let mut metals = 0;
        for sphere in small {
            let center = sphere.center();
            assert_eq!(sphere.radius(), 0.2);
            assert_eq!(center.y, 0.2);
            assert!((center - CLEARING_CENTER).length() > CLEARING_RADIUS);

            match *sphere.material() {
                Material::Lambertian { albedo } => {
                    assert!(albedo.min_element() >= 0.0 && albedo.max_element() < 1.0);
                }
                Material::Metal { albedo, fuzz } => {
                    metals += 1;
                    assert!((0.0..0.5).contains(&fuzz));
                    assert!(albedo.min_element() >= 0.5 && albedo.max_element() < 1.0);
                }
                Material::Dielectric { refraction_index } => {
                    assert_eq!(refraction_index, 1.5);
                }
            }
        }
        // About 15% of roughly 480 spheres
        assert!(metals > 0);

        assert_eq!(features[0].center(), Point3::new(0.0, 1.0, 0.0));
        assert_eq!(*features[0].material(), Material::dielectric(1.5));
        assert_eq!(features[1].center(), Point3::new(-4.0, 1.0, 0.0));
        assert_eq!(
            *features[1].material(),
            Material::lambertian(Color::new(0.4, 0.2, 0.1))
        );
        assert_eq!(features[2].center(), Point3::new(4.0, 1.0, 0.0));
        assert_eq!(
            *features[2].material(),
            Material::metal(Color::new(0.7, 0.6, 0.5), 0.0)
        );
        assert!(features.iter().all(|s| s.radius() == 1.0));
    }

    #[test]
    fn test_scene_rng_is_reproducible() {
        let first = cover_spheres(&mut scene_rng(Some(7))).expect("valid scene");
        let second = cover_spheres(&mut scene_rng(Some(7))).expect("valid scene");
        assert_eq!(first, second);
    }

    #[test]
    fn test_scene_kind_build() {
        let mut rng = scene_rng(Some(42));
        assert_eq!(SceneKind::Showcase.build(&mut rng).expect("valid scene").len(), 4);
        assert!(SceneKind::default().build(&mut rng).expect("valid scene").len() > 4);
    }
}
