//! JSON settings files: render, camera and scene description in one place.

use crate::config::{ConfigError, ConfigResult};
use crate::material::{Color, Dielectric, Lambertian, Material, Metal};
use crate::scene::{random_scene, Scene};
use crate::{Camera, CameraConfig, RenderConfig};
use lumen_math::Vec3;
use rand::RngCore;
use serde::Deserialize;
use std::path::Path;

/// Small spheres in the default random scene.
pub const DEFAULT_NUM_SPHERES: usize = 100;

/// Everything needed to describe a render.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub render: RenderConfig,
    pub camera: CameraConfig,
    pub scene: SceneConfig,
}

impl Default for Settings {
    /// The random demo scene seen from above and to the side, slightly defocused.
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
            camera: CameraConfig::default()
                .with_position(Vec3::new(13.0, 2.0, 3.0), Vec3::ZERO, Vec3::Y)
                .with_lens(20.0, 0.1, 10.0),
            scene: SceneConfig::default(),
        }
    }
}

/// How to populate the scene.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneConfig {
    /// The procedural demo scene
    Random { num_spheres: usize },
    /// An explicit list of spheres
    Spheres(Vec<SphereConfig>),
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfig::Random {
            num_spheres: DEFAULT_NUM_SPHERES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SphereConfig {
    pub center: Vec3,
    pub radius: f32,
    pub material: MaterialConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MaterialConfig {
    Lambertian {
        albedo: Color,
    },
    Metal {
        albedo: Color,
        #[serde(default)]
        fuzz: f32,
    },
    Dielectric {
        refraction_index: f32,
    },
}

impl From<MaterialConfig> for Material {
    fn from(config: MaterialConfig) -> Self {
        match config {
            MaterialConfig::Lambertian { albedo } => Lambertian::new(albedo).into(),
            MaterialConfig::Metal { albedo, fuzz } => Metal::new(albedo, fuzz).into(),
            MaterialConfig::Dielectric { refraction_index } => {
                Dielectric::new(refraction_index).into()
            }
        }
    }
}

impl Settings {
    /// Load and validate settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        log::info!("Loading settings from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Build the camera. Its aspect ratio always follows the image size.
    pub fn camera(&self) -> Camera {
        Camera::new(&self.camera.with_aspect_ratio(self.render.aspect_ratio()))
    }

    /// Parse and validate settings from a JSON string.
    pub fn from_json(text: &str) -> ConfigResult<Self> {
        let settings: Settings = serde_json::from_str(text)?;
        settings.render.validate()?;
        Ok(settings)
    }
}

impl SceneConfig {
    /// Build the scene. `rng` is only consumed by the random scene.
    pub fn build(&self, rng: &mut dyn RngCore) -> ConfigResult<Scene> {
        match self {
            SceneConfig::Random { num_spheres } => Ok(random_scene(*num_spheres, rng)),
            SceneConfig::Spheres(spheres) => {
                let mut scene = Scene::new();
                for (index, sphere) in spheres.iter().enumerate() {
                    sphere.validate(index)?;
                    let material = scene.add_material(sphere.material);
                    scene.add_sphere(sphere.center, sphere.radius, material);
                }
                log::info!("Built scene with {} spheres", scene.object_count());
                Ok(scene)
            }
        }
    }
}

impl SphereConfig {
    fn validate(&self, index: usize) -> ConfigResult<()> {
        if self.radius <= 0.0 || !self.radius.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "sphere {index}: radius must be positive, got {}",
                self.radius
            )));
        }
        if let MaterialConfig::Dielectric { refraction_index } = self.material {
            if refraction_index <= 0.0 || refraction_index.is_nan() {
                return Err(ConfigError::Invalid(format!(
                    "sphere {index}: refraction_index must be positive, got {refraction_index}"
                )));
            }
        }
        Ok(())
    }
}
