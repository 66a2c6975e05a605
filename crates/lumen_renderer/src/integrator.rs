//! Recursive Monte Carlo radiance estimator.

use crate::hittable::Hittable;
use crate::material::Color;
use crate::scene::Scene;
use lumen_math::vector::unit_vector;
use lumen_math::{Interval, Ray};
use rand::RngCore;

/// Hits closer than this are ignored so a scattered ray does not re-hit the
/// surface it just left (shadow acne).
pub const SHADOW_ACNE_EPSILON: f32 = 0.001;

/// Compute the linear radiance arriving along `ray`.
///
/// Bounces the ray through the scene until it is absorbed, escapes to the
/// sky, or `depth` bounces have been used up.
pub fn ray_color(ray: &Ray, scene: &Scene, depth: u32, rng: &mut dyn RngCore) -> Color {
    // Out of bounces: no more light is gathered
    if depth == 0 {
        return Color::ZERO;
    }

    let Some(rec) = scene.hit(ray, Interval::new(SHADOW_ACNE_EPSILON, f32::INFINITY)) else {
        return sky_gradient(ray);
    };

    let Some(material) = scene.material(rec.material) else {
        log::trace!("hit references unknown material {:?}", rec.material);
        return Color::ZERO;
    };

    let emission = material.emitted(rec.p);
    match material.scatter(ray, &rec, rng) {
        Some(result) => {
            emission + result.attenuation * ray_color(&result.scattered, scene, depth - 1, rng)
        }
        None => emission,
    }
}

/// Vertical white-to-blue gradient seen by rays that escape the scene.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = unit_vector(ray.direction());
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    (1.0 - a) * white + a * blue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{Dielectric, Lambertian, MaterialId, Metal};
    use lumen_math::Vec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn single_sphere(material: impl Into<crate::Material>) -> Scene {
        let mut scene = Scene::new();
        let id = scene.add_material(material);
        scene.add_sphere(Vec3::new(0.0, 0.0, -1.0), 0.5, id);
        scene
    }

    #[test]
    fn test_zero_depth_is_black() {
        let scene = single_sphere(Lambertian::new(Color::ONE));
        let mut rng = StdRng::seed_from_u64(42);

        for direction in [Vec3::new(0.0, 0.0, -1.0), Vec3::Y, -Vec3::Y] {
            let ray = Ray::new_simple(Vec3::ZERO, direction);
            assert_eq!(ray_color(&ray, &scene, 0, &mut rng), Color::ZERO);
        }
    }

    #[test]
    fn test_miss_returns_exact_sky() {
        let scene = Scene::new();
        let mut rng = StdRng::seed_from_u64(42);

        let up = Ray::new_simple(Vec3::ZERO, Vec3::Y);
        assert_eq!(ray_color(&up, &scene, 10, &mut rng), Color::new(0.5, 0.7, 1.0));

        let down = Ray::new_simple(Vec3::ZERO, -Vec3::Y);
        assert_eq!(ray_color(&down, &scene, 10, &mut rng), Color::ONE);
    }

    #[test]
    fn test_sky_gradient_ignores_direction_length() {
        let short = sky_gradient(&Ray::new_simple(Vec3::ZERO, Vec3::new(0.0, 0.5, 0.5)));
        let long = sky_gradient(&Ray::new_simple(Vec3::ZERO, Vec3::new(0.0, 4.0, 4.0)));
        assert!((short - long).length() < 1e-6);
    }

    #[test]
    fn test_unknown_material_contributes_black() {
        let mut scene = Scene::new();
        scene.add_sphere(Vec3::new(0.0, 0.0, -1.0), 0.5, MaterialId(99));

        let ray = Ray::new_simple(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(ray_color(&ray, &scene, 5, &mut rng), Color::ZERO);
    }

    #[test]
    fn test_single_bounce_is_attenuated_sky() {
        // A mirror seen head-on reflects straight back to the camera, which
        // sees the sky behind it (+Z, a = 0.5) after one bounce.
        let albedo = Color::new(0.8, 0.6, 0.2);
        let scene = single_sphere(Metal::new(albedo, 0.0));
        let mut rng = StdRng::seed_from_u64(3);

        let ray = Ray::new_simple(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let color = ray_color(&ray, &scene, 2, &mut rng);
        let behind = sky_gradient(&Ray::new_simple(Vec3::ZERO, Vec3::Z));
        assert!((color - albedo * behind).length() < 1e-5);
    }

    #[test]
    fn test_depth_one_hit_is_black() {
        // The bounce happens but the recursive call has no depth left
        let scene = single_sphere(Metal::new(Color::ONE, 0.0));
        let mut rng = StdRng::seed_from_u64(3);

        let ray = Ray::new_simple(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(ray_color(&ray, &scene, 1, &mut rng), Color::ZERO);
    }

    #[test]
    fn test_clear_glass_passes_sky_through() {
        // Index 1.0 glass never bends or tints a head-on ray
        let scene = single_sphere(Dielectric::new(1.0));
        let mut rng = StdRng::seed_from_u64(8);

        let ray = Ray::new_simple(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let color = ray_color(&ray, &scene, 10, &mut rng);
        let sky = sky_gradient(&ray);
        assert!((color - sky).length() < 1e-5);
    }

    #[test]
    fn test_diffuse_estimate_is_bounded_by_albedo() {
        let scene = single_sphere(Lambertian::new(Color::splat(0.5)));
        let mut rng = StdRng::seed_from_u64(17);

        let ray = Ray::new_simple(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        for _ in 0..100 {
            let color = ray_color(&ray, &scene, 50, &mut rng);
            assert!(color.max_element() <= 0.5 + 1e-6);
            assert!(color.min_element() >= 0.0);
        }
    }
}
