//! Random sampling primitives for Monte Carlo integration.
//!
//! Every sampler takes the RNG explicitly. Render workers each own their own
//! generator, so nothing here touches shared state.

use crate::vector::unit_vector;
use crate::Vec3;
use rand::{Rng, RngCore};

/// Uniform `f32` in `[0, 1)`.
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Uniform `f32` in `[min, max)`.
#[inline]
pub fn gen_range_f32(rng: &mut dyn RngCore, min: f32, max: f32) -> f32 {
    min + (max - min) * gen_f32(rng)
}

/// Random vector with each component uniform in `[min, max)`.
pub fn random_vec(rng: &mut dyn RngCore, min: f32, max: f32) -> Vec3 {
    Vec3::new(
        gen_range_f32(rng, min, max),
        gen_range_f32(rng, min, max),
        gen_range_f32(rng, min, max),
    )
}

/// Random point strictly inside the unit sphere (rejection sampling).
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = random_vec(rng, -1.0, 1.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Random unit vector, from a unit-sphere sample pushed out to the surface.
pub fn random_unit_vector(rng: &mut dyn RngCore) -> Vec3 {
    unit_vector(random_in_unit_sphere(rng))
}

/// Random point strictly inside the unit disk on the z = 0 plane.
pub fn random_in_unit_disk(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(
            gen_range_f32(rng, -1.0, 1.0),
            gen_range_f32(rng, -1.0, 1.0),
            0.0,
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Random point in the unit ball, flipped into the hemisphere around `normal`.
pub fn random_in_hemisphere(rng: &mut dyn RngCore, normal: Vec3) -> Vec3 {
    let in_unit_sphere = random_in_unit_sphere(rng);
    if in_unit_sphere.dot(normal) > 0.0 {
        in_unit_sphere
    } else {
        -in_unit_sphere
    }
}
