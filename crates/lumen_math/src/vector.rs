//! Vector helpers that glam does not provide with the semantics we need.
//!
//! `Vec3` doubles as point, direction and color. glam's own `normalize`
//! produces NaN for a zero vector and its `refract` returns zero on total
//! internal reflection, so the renderer goes through these instead.

use crate::Vec3;

/// Components below this magnitude count as zero in [`near_zero`].
pub const NEAR_ZERO_EPSILON: f32 = 1e-8;

/// Normalize `v`, returning it unchanged when its length is exactly zero.
#[inline]
pub fn unit_vector(v: Vec3) -> Vec3 {
    let len = v.length();
    if len > 0.0 {
        v / len
    } else {
        v
    }
}

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a unit vector through a surface with relative index `etai_over_etat`.
#[inline]
pub fn refract(uv: Vec3, n: Vec3, etai_over_etat: f32) -> Vec3 {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).max(0.0).sqrt() * n;
    r_out_perp + r_out_parallel
}

/// True if every component is within [`NEAR_ZERO_EPSILON`] of zero.
#[inline]
pub fn near_zero(v: Vec3) -> bool {
    v.abs().cmplt(Vec3::splat(NEAR_ZERO_EPSILON)).all()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_vector_has_unit_length() {
        for v in [
            Vec3::new(3.0, 4.0, 0.0),
            Vec3::new(-1.0, 2.0, -3.0),
            Vec3::new(1e-3, 0.0, 0.0),
            Vec3::new(250.0, -17.5, 9.0),
        ] {
            assert!((unit_vector(v).length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_unit_vector_of_zero_is_zero() {
        let v = unit_vector(Vec3::ZERO);
        assert_eq!(v, Vec3::ZERO);
        assert!(!v.is_nan());
    }

    #[test]
    fn test_reflect() {
        let v = Vec3::new(1.0, -1.0, 0.0);
        assert_eq!(reflect(v, Vec3::Y), Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_reflect_is_involution() {
        let n = unit_vector(Vec3::new(1.0, 2.0, -0.5));
        for v in [
            Vec3::new(0.3, -0.7, 0.2),
            Vec3::new(-4.0, 1.0, 2.5),
            Vec3::Z,
        ] {
            let twice = reflect(reflect(v, n), n);
            assert!((twice - v).length() < 1e-5);
        }
    }

    #[test]
    fn test_refract_with_unit_ratio_does_not_bend() {
        let n = Vec3::Y;
        let uv = unit_vector(Vec3::new(0.3, -1.0, 0.1));
        let out = refract(uv, n, 1.0);
        assert!((out - uv).length() < 1e-5);
    }

    #[test]
    fn test_refract_head_on_passes_straight_through() {
        let out = refract(-Vec3::Y, Vec3::Y, 1.0 / 1.5);
        assert!((out - (-Vec3::Y)).length() < 1e-6);
    }

    #[test]
    fn test_refract_bends_toward_normal_entering_denser_medium() {
        let uv = unit_vector(Vec3::new(1.0, -1.0, 0.0));
        let out = refract(uv, Vec3::Y, 1.0 / 1.5);

        // sin(theta_t) = sin(theta_i) / 1.5
        let sin_i = uv.x.abs();
        let sin_t = out.x.abs() / out.length();
        assert!((sin_t - sin_i / 1.5).abs() < 1e-5);
        assert!(out.y < 0.0);
    }

    #[test]
    fn test_near_zero() {
        assert!(near_zero(Vec3::ZERO));
        assert!(near_zero(Vec3::new(1e-9, -1e-9, 0.0)));
        assert!(!near_zero(Vec3::new(1e-9, 0.0, 1e-7)));
        assert!(!near_zero(Vec3::X));
    }
}
