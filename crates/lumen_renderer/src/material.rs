//! Surface scattering models and the material table.
//!
//! Materials are a closed set dispatched by a single `match`. Geometry holds
//! a [`MaterialId`] into a [`MaterialTable`] rather than a reference, so the
//! scene can be shared across render workers without reference counting.

use crate::hittable::HitRecord;
use lumen_math::sampling::{gen_f32, random_in_unit_sphere, random_unit_vector};
use lumen_math::vector::{near_zero, reflect, refract, unit_vector};
use lumen_math::{Ray, Vec3};
use rand::RngCore;

/// Color type alias (linear RGB, typically 0-1)
pub type Color = Vec3;

/// Outcome of a scattering event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterResult {
    /// Per-channel factor applied to the light arriving along `scattered`
    pub attenuation: Color,
    pub scattered: Ray,
}

/// Lambertian (diffuse) material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    /// Create a new Lambertian material with the given albedo color.
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }

    pub fn albedo(&self) -> Color {
        self.albedo
    }

    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> ScatterResult {
        let mut scatter_direction = rec.normal + random_unit_vector(rng);

        // Catch degenerate scatter direction
        if near_zero(scatter_direction) {
            scatter_direction = rec.normal;
        }

        ScatterResult {
            attenuation: self.albedo,
            scattered: Ray::new(rec.p, scatter_direction, ray_in.time()),
        }
    }
}

/// Metal (specular) material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metal {
    albedo: Color,
    fuzz: f32,
}

impl Metal {
    /// Create a new Metal material.
    ///
    /// - `albedo`: The color of the metal
    /// - `fuzz`: Roughness, 0.0 = perfect mirror, 1.0 = very rough. Clamped to [0, 1].
    pub fn new(albedo: Color, fuzz: f32) -> Self {
        Self {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }

    pub fn albedo(&self) -> Color {
        self.albedo
    }

    pub fn fuzz(&self) -> f32 {
        self.fuzz
    }

    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        let reflected = reflect(unit_vector(ray_in.direction()), rec.normal);
        let scattered_dir = reflected + self.fuzz * random_in_unit_sphere(rng);

        // Absorb anything fuzzed below the surface
        if scattered_dir.dot(rec.normal) <= 0.0 {
            return None;
        }

        Some(ScatterResult {
            attenuation: self.albedo,
            scattered: Ray::new(rec.p, scattered_dir, ray_in.time()),
        })
    }
}

/// Dielectric (glass) material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dielectric {
    /// Index of refraction
    refraction_index: f32,
}

impl Dielectric {
    /// Create a new Dielectric material.
    ///
    /// - `refraction_index`: 1.0 = air, 1.5 = glass, 2.4 = diamond
    pub fn new(refraction_index: f32) -> Self {
        Self { refraction_index }
    }

    pub fn refraction_index(&self) -> f32 {
        self.refraction_index
    }

    /// Schlick's approximation for reflectance
    fn reflectance(cosine: f32, ratio: f32) -> f32 {
        let r0 = ((1.0 - ratio) / (1.0 + ratio)).powi(2);
        r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
    }

    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> ScatterResult {
        let refraction_ratio = if rec.front_face {
            1.0 / self.refraction_index
        } else {
            self.refraction_index
        };

        let unit_direction = unit_vector(ray_in.direction());
        let cos_theta = (-unit_direction).dot(rec.normal).min(1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();

        // Check for total internal reflection
        let cannot_refract = refraction_ratio * sin_theta > 1.0;

        let direction =
            if cannot_refract || Self::reflectance(cos_theta, refraction_ratio) > gen_f32(rng) {
                reflect(unit_direction, rec.normal)
            } else {
                refract(unit_direction, rec.normal, refraction_ratio)
            };

        ScatterResult {
            attenuation: Color::ONE,
            scattered: Ray::new(rec.p, direction, ray_in.time()),
        }
    }
}

/// The closed set of surface models.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    Lambertian(Lambertian),
    Metal(Metal),
    Dielectric(Dielectric),
}

impl Material {
    /// Scatter an incoming ray.
    ///
    /// Returns `None` if the ray is absorbed.
    pub fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        match self {
            Material::Lambertian(m) => Some(m.scatter(ray_in, rec, rng)),
            Material::Metal(m) => m.scatter(ray_in, rec, rng),
            Material::Dielectric(m) => Some(m.scatter(ray_in, rec, rng)),
        }
    }

    /// Light emitted at `p`. None of the current models emit.
    pub fn emitted(&self, _p: Vec3) -> Color {
        Color::ZERO
    }
}

impl From<Lambertian> for Material {
    fn from(m: Lambertian) -> Self {
        Material::Lambertian(m)
    }
}

impl From<Metal> for Material {
    fn from(m: Metal) -> Self {
        Material::Metal(m)
    }
}

impl From<Dielectric> for Material {
    fn from(m: Dielectric) -> Self {
        Material::Dielectric(m)
    }
}

/// Handle to a material interned in a [`MaterialTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialId(pub u32);

/// Interned materials, indexed by [`MaterialId`].
///
/// Built once alongside the geometry and read-only while rendering.
#[derive(Debug, Clone, Default)]
pub struct MaterialTable {
    materials: Vec<Material>,
}

impl MaterialTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a material, returning its handle.
    pub fn add(&mut self, material: impl Into<Material>) -> MaterialId {
        let id = MaterialId(self.materials.len() as u32);
        self.materials.push(material.into());
        id
    }

    /// Look up a material. Handles from another table may be out of range.
    pub fn get(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
