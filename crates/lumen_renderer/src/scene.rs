//! Scene assembly: geometry plus the material table it refers to.

use crate::hittable::{HitRecord, Hittable, HittableList};
use crate::material::{Color, Dielectric, Lambertian, Material, MaterialId, MaterialTable, Metal};
use crate::sphere::Sphere;
use lumen_math::sampling::{gen_f32, gen_range_f32, random_vec};
use lumen_math::{Interval, Ray, Vec3};
use rand::RngCore;

/// A renderable scene. Read-only once built.
#[derive(Default)]
pub struct Scene {
    world: HittableList,
    materials: MaterialTable,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a material and return its handle.
    pub fn add_material(&mut self, material: impl Into<Material>) -> MaterialId {
        self.materials.add(material)
    }

    /// Add a sphere using a material previously returned by [`Scene::add_material`].
    pub fn add_sphere(&mut self, center: Vec3, radius: f32, material: MaterialId) {
        self.world.add(Box::new(Sphere::new(center, radius, material)));
    }

    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id)
    }

    pub fn object_count(&self) -> usize {
        self.world.len()
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }
}

impl Hittable for Scene {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        self.world.hit(ray, ray_t)
    }
}

/// Radius of the scattered spheres in [`random_scene`].
const SMALL_SPHERE_RADIUS: f32 = 0.2;

/// Build the classic "many small spheres" demo scene.
///
/// Up to `num_spheres` radius-0.2 spheres are scattered over a grid around
/// the origin, on top of a huge ground sphere, with three large feature
/// spheres (glass, matte brown, polished metal) in the middle.
pub fn random_scene(num_spheres: usize, rng: &mut dyn RngCore) -> Scene {
    let mut scene = Scene::new();

    let ground = scene.add_material(Lambertian::new(Color::new(0.5, 0.5, 0.5)));
    scene.add_sphere(Vec3::new(0.0, -1000.0, 0.0), 1000.0, ground);

    let small_spheres = scatter_small_spheres(num_spheres, rng);
    let count = small_spheres.len();
    for (center, material) in small_spheres {
        let material = scene.add_material(material);
        scene.add_sphere(center, SMALL_SPHERE_RADIUS, material);
    }

    let glass = scene.add_material(Dielectric::new(1.5));
    scene.add_sphere(Vec3::new(0.0, 1.0, 0.0), 1.0, glass);

    let matte = scene.add_material(Lambertian::new(Color::new(0.4, 0.2, 0.1)));
    scene.add_sphere(Vec3::new(-4.0, 1.0, 0.0), 1.0, matte);

    let mirror = scene.add_material(Metal::new(Color::new(0.7, 0.6, 0.5), 0.0));
    scene.add_sphere(Vec3::new(4.0, 1.0, 0.0), 1.0, mirror);

    log::info!(
        "Built random scene: {} small spheres, {} objects total",
        count,
        scene.object_count()
    );

    scene
}

/// Centers and materials of the small spheres, in grid order.
fn scatter_small_spheres(num_spheres: usize, rng: &mut dyn RngCore) -> Vec<(Vec3, Material)> {
    let max_per_row = (num_spheres as f64).sqrt() as i32;
    let mut spheres = Vec::new();

    'grid: for a in -max_per_row..max_per_row {
        for b in -max_per_row..max_per_row {
            if spheres.len() >= num_spheres {
                break 'grid;
            }

            let choose_mat = gen_f32(rng);
            let center = Vec3::new(
                a as f32 + 0.9 * gen_f32(rng),
                SMALL_SPHERE_RADIUS,
                b as f32 + 0.9 * gen_f32(rng),
            );

            // Keep to the 20x20 patch in view
            if center.x < -10.0 || center.x > 10.0 || center.z < -10.0 || center.z > 10.0 {
                continue;
            }
            // Leave room for the metal feature sphere
            if (center - Vec3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            let material = if choose_mat < 0.8 {
                let albedo = random_vec(rng, 0.0, 1.0) * random_vec(rng, 0.0, 1.0);
                Material::from(Lambertian::new(albedo))
            } else if choose_mat < 0.95 {
                let albedo = random_vec(rng, 0.5, 1.0);
                let fuzz = gen_range_f32(rng, 0.0, 0.5);
                Material::from(Metal::new(albedo, fuzz))
            } else {
                Material::from(Dielectric::new(1.5))
            };
            spheres.push((center, material));
        }
    }

    spheres
}
