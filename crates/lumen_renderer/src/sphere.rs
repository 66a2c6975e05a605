//! Sphere primitive for ray tracing.

use crate::hittable::{HitRecord, Hittable};
use crate::material::MaterialId;
use lumen_math::{Interval, Ray, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: MaterialId,
}

impl Sphere {
    /// Create a new sphere. `radius` must be positive.
    pub fn new(center: Vec3, radius: f32, material: MaterialId) -> Self {
        debug_assert!(radius > 0.0, "sphere radius must be positive, got {radius}");
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> MaterialId {
        self.material
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let half_b = oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        // Tangent rays (discriminant exactly zero) are treated as misses.
        let discriminant = half_b * half_b - a * c;
        if discriminant <= 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (-half_b - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (-half_b + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let outward_normal = (ray.at(root) - self.center) / self.radius;
        Some(HitRecord::new(ray, root, outward_normal, self.material))
    }
}
