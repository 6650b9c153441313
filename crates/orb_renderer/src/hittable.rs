//! Hittable trait and HitRecord for ray-object intersection.

use crate::{Material, Ray};
use orb_math::{Interval, Point3, Vec3};

/// Record of a ray-object intersection.
///
/// Borrows the material of the object that was hit, so it cannot outlive
/// the scene.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Point of intersection
    pub p: Point3,
    /// Unit surface normal, always pointing against the incoming ray
    pub normal: Vec3,
    /// Parameter t where the intersection occurs
    pub t: f64,
    /// Whether the ray hit the front face (outside) of the surface
    pub front_face: bool,
    /// Material at the intersection point
    pub material: &'a Material,
}

impl<'a> HitRecord<'a> {
    /// Build a record, orienting `outward_normal` against the ray.
    ///
    /// `outward_normal` must be unit length.
    pub fn new(
        ray: &Ray,
        t: f64,
        p: Point3,
        outward_normal: Vec3,
        material: &'a Material,
    ) -> Self {
        // If the ray and normal point in the same direction, we're inside
        let front_face = ray.direction().dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };

        Self {
            p,
            normal,
            t,
            front_face,
            material,
        }
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Find the closest intersection with `t` strictly inside `ray_t`.
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>>;
}

/// An ordered list of hittable objects.
#[derive(Default)]
pub struct HittableList {
    objects: Vec<Box<dyn Hittable>>,
}

impl HittableList {
    /// Create a new empty hittable list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: impl Hittable + 'static) {
        self.objects.push(Box::new(object));
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Hittable for HittableList {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let mut closest: Option<HitRecord<'a>> = None;

        for object in &self.objects {
            // Narrow the window to the nearest hit found so far
            let closest_so_far = closest.map_or(ray_t.max, |rec| rec.t);
            if let Some(rec) = object.hit(ray, ray_t.with_max(closest_so_far)) {
                closest = Some(rec);
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Sphere};

    fn grey() -> Material {
        Material::lambertian(Color::splat(0.5))
    }

    #[test]
    fn test_empty_list_misses() {
        let world = HittableList::new();
        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!(world.is_empty());
        assert!(world.hit(&ray, Interval::new(0.001, f64::INFINITY)).is_none());
    }

    #[test]
    fn test_list_returns_closest_hit() {
        let centers = [-9.0, -3.0, -6.0, -12.0];
        let spheres: Vec<Sphere> = centers
            .iter()
            .map(|&z| Sphere::new(Point3::new(0.0, 0.0, z), 1.0, grey()).expect("valid sphere"))
            .collect();

        let mut world = HittableList::new();
        for sphere in &spheres {
            world.add(sphere.clone());
        }
        assert_eq!(world.len(), 4);

        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let ray_t = Interval::new(0.001, f64::INFINITY);

        let expected = spheres
            .iter()
            .filter_map(|s| s.hit(&ray, ray_t))
            .map(|rec| rec.t)
            .fold(f64::INFINITY, f64::min);

        let rec = world.hit(&ray, ray_t).expect("ray should hit");
        assert!((rec.t - expected).abs() < 1e-12);
        assert!((rec.t - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_list_respects_interval() {
        let mut world = HittableList::new();
        world.add(Sphere::new(Point3::new(0.0, 0.0, -3.0), 1.0, grey()).expect("valid sphere"));

        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        // Both roots (t = 2 and t = 4) are outside the window
        assert!(world.hit(&ray, Interval::new(0.001, 1.5)).is_none());
        // Only the far root is inside
        let rec = world.hit(&ray, Interval::new(3.0, 10.0)).expect("far side hit");
        assert!((rec.t - 4.0).abs() < 1e-12);
        assert!(!rec.front_face);
    }

    #[test]
    fn test_hit_record_faces_ray() {
        let mat = grey();
        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let front = HitRecord::new(&ray, 1.0, ray.at(1.0), Vec3::Z, &mat);
        assert!(front.front_face);
        assert_eq!(front.normal, Vec3::Z);

        let back = HitRecord::new(&ray, 1.0, ray.at(1.0), -Vec3::Z, &mat);
        assert!(!back.front_face);
        assert_eq!(back.normal, Vec3::Z);
    }
}
