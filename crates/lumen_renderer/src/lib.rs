//! Lumen renderer - CPU path tracing
//!
//! A Monte Carlo path tracer over implicit spheres with diffuse, metal and
//! glass materials, a thin-lens camera with motion blur, and a parallel
//! row-band driver.

mod band;
mod camera;
mod config;
mod hittable;
mod integrator;
mod material;
mod output;
mod renderer;
mod scene;
mod settings;
mod sphere;

pub use band::{band_seed, generate_bands, render_band, RowBand};
pub use camera::{Camera, CameraConfig};
pub use config::{ConfigError, ConfigResult, RenderConfig, DEFAULT_BAND_HEIGHT};
pub use hittable::{HitRecord, Hittable, HittableList};
pub use integrator::{ray_color, sky_gradient, SHADOW_ACNE_EPSILON};
pub use material::{
    Color, Dielectric, Lambertian, Material, MaterialId, MaterialTable, Metal, ScatterResult,
};
pub use output::{
    color_to_rgb, linear_to_gamma, save_image, write_ppm, OutputError, OutputResult,
};
pub use renderer::{render, render_pixel, ImageBuffer};
pub use scene::{random_scene, Scene};
pub use settings::{MaterialConfig, SceneConfig, Settings, SphereConfig, DEFAULT_NUM_SPHERES};
pub use sphere::Sphere;

/// Re-export the math types used throughout the renderer API
pub use lumen_math::{Interval, Ray, Vec3};
