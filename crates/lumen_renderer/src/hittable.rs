//! Hittable trait and HitRecord for ray-object intersection.

use crate::material::MaterialId;
use lumen_math::{Interval, Ray, Vec3};

/// Record of a ray-object intersection.
///
/// Records are plain values: the aggregate keeps whichever is closest and
/// the integrator hands it straight to the hit material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Point of intersection
    pub p: Vec3,
    /// Unit surface normal, always pointing against the incoming ray
    pub normal: Vec3,
    /// Material of the surface that was hit
    pub material: MaterialId,
    /// Ray parameter at the intersection
    pub t: f32,
    /// Whether the ray struck the outside of the surface
    pub front_face: bool,
}

impl HitRecord {
    /// Build a record at parameter `t`, orienting `outward_normal` (unit
    /// length) against the ray.
    pub fn new(ray: &Ray, t: f32, outward_normal: Vec3, material: MaterialId) -> Self {
        // If the ray and normal point in the same direction, we're inside
        let front_face = ray.direction().dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };

        Self {
            p: ray.at(t),
            normal,
            material,
            t,
            front_face,
        }
    }
}

/// Trait for objects that can be hit by rays.
///
/// Geometry is immutable once a scene is built, so every implementation is
/// shared across render workers as-is.
pub trait Hittable: Send + Sync {
    /// Return the nearest intersection with `t` strictly inside `ray_t`.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord>;
}

/// An ordered list of hittable objects, searched linearly.
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
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Clear all objects from the list.
    pub fn clear(&mut self) {
        self.objects.clear();
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

impl Default for HittableList {
    fn default() -> Self {
        Self::new()
    }
}

impl Hittable for HittableList {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest: Option<HitRecord> = None;
        let mut closest_so_far = ray_t.max;

        for object in &self.objects {
            if let Some(rec) = object.hit(ray, ray_t.with_max(closest_so_far)) {
                closest_so_far = rec.t;
                closest = Some(rec);
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sphere;

    const RAY_T: Interval = Interval::new(0.001, f32::INFINITY);

    fn forward_ray() -> Ray {
        Ray::new_simple(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn test_face_normal_front() {
        let rec = HitRecord::new(&forward_ray(), 1.0, Vec3::Z, MaterialId(0));
        assert!(rec.front_face);
        assert_eq!(rec.normal, Vec3::Z);
        assert_eq!(rec.p, Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_face_normal_back() {
        let rec = HitRecord::new(&forward_ray(), 1.0, -Vec3::Z, MaterialId(0));
        assert!(!rec.front_face);
        assert_eq!(rec.normal, Vec3::Z);
    }

    #[test]
    fn test_empty_list_misses() {
        let list = HittableList::new();
        assert!(list.is_empty());
        assert!(list.hit(&forward_ray(), RAY_T).is_none());
    }

    #[test]
    fn test_list_returns_nearest_hit() {
        let near = Sphere::new(Vec3::new(0.0, 0.0, -1.5), 0.5, MaterialId(1));
        let far = Sphere::new(Vec3::new(0.0, 0.0, -2.5), 0.5, MaterialId(2));

        let mut list = HittableList::new();
        list.add(Box::new(near.clone()));
        list.add(Box::new(far.clone()));
        let rec = list.hit(&forward_ray(), RAY_T).unwrap();
        assert!((rec.t - 1.0).abs() < 1e-5);
        assert_eq!(rec.material, MaterialId(1));

        // Insertion order must not matter
        let mut reversed = HittableList::new();
        reversed.add(Box::new(far));
        reversed.add(Box::new(near));
        let rec = reversed.hit(&forward_ray(), RAY_T).unwrap();
        assert!((rec.t - 1.0).abs() < 1e-5);
        assert_eq!(rec.material, MaterialId(1));
    }

    #[test]
    fn test_list_respects_interval_max() {
        let mut list = HittableList::new();
        list.add(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, -2.5),
            0.5,
            MaterialId(0),
        )));

        // The sphere spans t in [2, 3]; nothing lies before t = 1.5
        assert!(list.hit(&forward_ray(), Interval::new(0.001, 1.5)).is_none());
    }

    #[test]
    fn test_clear() {
        let mut list = HittableList::default();
        list.add(Box::new(Sphere::new(Vec3::ZERO, 1.0, MaterialId(0))));
        assert_eq!(list.len(), 1);
        list.clear();
        assert!(list.is_empty());
    }
}
