//! Camera for ray generation.
//!
//! A thin-lens camera: rays start on a disk of radius `aperture / 2` around
//! the eye (depth of field) at a time drawn from the shutter interval
//! (motion blur).

use lumen_math::sampling::{gen_f32, random_in_unit_disk};
use lumen_math::vector::unit_vector;
use lumen_math::{Ray, Vec3};
use rand::RngCore;
use serde::Deserialize;
use std::f32::consts::PI;

/// Plain camera settings. Fixed for the duration of a render.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub look_from: Vec3,
    pub look_at: Vec3,
    pub vup: Vec3,
    /// Vertical field of view in degrees
    pub vfov: f32,
    /// Viewport width over height
    pub aspect_ratio: f32,
    /// Lens diameter; 0 gives a pinhole camera
    pub aperture: f32,
    /// Distance from the eye to the plane of perfect focus
    pub focus_dist: f32,
    /// Shutter open time
    pub time0: f32,
    /// Shutter close time
    pub time1: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            look_from: Vec3::ZERO,
            look_at: Vec3::new(0.0, 0.0, -1.0),
            vup: Vec3::Y,
            vfov: 90.0,
            aspect_ratio: 16.0 / 9.0,
            aperture: 0.0,
            focus_dist: 1.0,
            time0: 0.0,
            time1: 1.0,
        }
    }
}

impl CameraConfig {
    /// Set camera position.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, vfov: f32, aperture: f32, focus_dist: f32) -> Self {
        self.vfov = vfov;
        self.aperture = aperture;
        self.focus_dist = focus_dist;
        self
    }

    /// Set the shutter interval.
    pub fn with_shutter(mut self, time0: f32, time1: f32) -> Self {
        self.time0 = time0;
        self.time1 = time1;
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: f32) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }
}

/// Camera for generating rays into the scene.
#[derive(Debug, Clone)]
pub struct Camera {
    origin: Vec3,
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
    lens_radius: f32,
    time0: f32,
    time1: f32,
}

impl Camera {
    /// Derive the viewport and lens basis from `config`.
    pub fn new(config: &CameraConfig) -> Self {
        let theta = config.vfov * PI / 180.0;
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = config.aspect_ratio * viewport_height;

        // Orthonormal basis, w pointing back toward the eye
        let w = unit_vector(config.look_from - config.look_at);
        let u = unit_vector(config.vup.cross(w));
        let v = w.cross(u);

        let origin = config.look_from;
        let horizontal = u * viewport_width * config.focus_dist;
        let vertical = v * viewport_height * config.focus_dist;
        let lower_left_corner =
            origin - horizontal / 2.0 - vertical / 2.0 - w * config.focus_dist;

        Self {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
            u,
            v,
            w,
            lens_radius: config.aperture / 2.0,
            time0: config.time0,
            time1: config.time1,
        }
    }

    /// Generate a ray through viewport coordinates `(s, t)`.
    ///
    /// `(0, 0)` is the bottom-left corner and `(1, 1)` the top-right.
    /// Values outside `[0, 1]` are not clamped and extrapolate the viewport.
    pub fn get_ray(&self, s: f32, t: f32, rng: &mut dyn RngCore) -> Ray {
        let rd = self.lens_radius * random_in_unit_disk(rng);
        let offset = self.u * rd.x + self.v * rd.y;
        let time = self.time0 + gen_f32(rng) * (self.time1 - self.time0);

        Ray::new(
            self.origin + offset,
            self.lower_left_corner + s * self.horizontal + t * self.vertical
                - self.origin
                - offset,
            time,
        )
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Unit vector pointing from the look-at point back to the eye.
    pub fn w(&self) -> Vec3 {
        self.w
    }

    pub fn lens_radius(&self) -> f32 {
        self.lens_radius
    }
}
