//! Render settings and their validation.

use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading or validating settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid setting: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Image and sampling settings for a render.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub image_width: u32,
    pub image_height: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Base seed; every row band derives its own generator from it
    pub seed: u64,
    /// Rows per parallel work item
    pub band_height: u32,
}

/// Default rows per band.
pub const DEFAULT_BAND_HEIGHT: u32 = 16;

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_width: 400,
            image_height: 225,
            samples_per_pixel: 100,
            max_depth: 50,
            seed: 0,
            band_height: DEFAULT_BAND_HEIGHT,
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set quality settings.
    pub fn with_quality(mut self, samples_per_pixel: u32, max_depth: u32) -> Self {
        self.samples_per_pixel = samples_per_pixel;
        self.max_depth = max_depth;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Width over height, for the camera viewport.
    pub fn aspect_ratio(&self) -> f32 {
        self.image_width as f32 / self.image_height as f32
    }

    /// Check the settings can drive a render.
    ///
    /// Pixel coordinates are normalized by `size - 1`, so both dimensions
    /// need at least two pixels.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.image_width < 2 || self.image_height < 2 {
            return Err(ConfigError::Invalid(format!(
                "image must be at least 2x2, got {}x{}",
                self.image_width, self.image_height
            )));
        }
        // Pixels are addressed with u32 coordinates, so the pixel count must
        // fit one as well.
        if self.image_width.checked_mul(self.image_height).is_none() {
            return Err(ConfigError::Invalid(format!(
                "image of {}x{} has too many pixels",
                self.image_width, self.image_height
            )));
        }
        if self.samples_per_pixel == 0 {
            return Err(ConfigError::Invalid(
                "samples_per_pixel must be at least 1".to_string(),
            ));
        }
        if self.band_height == 0 {
            return Err(ConfigError::Invalid(
                "band_height must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(RenderConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_tiny_image() {
        let config = RenderConfig::default().with_resolution(1, 100);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_zero_samples() {
        let config = RenderConfig::default().with_quality(0, 10);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_overflowing_resolution() {
        let config = RenderConfig::default().with_resolution(70_000, 70_000);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = RenderConfig::default().with_resolution(65_536, 65_536);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        // Largest pixel count that still fits
        let config = RenderConfig::default().with_resolution(65_536, 65_535);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_band_height() {
        let mut config = RenderConfig::default();
        config.band_height = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.band_height = 1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_depth_is_allowed() {
        // Renders black, but it is a legal request
        let config = RenderConfig::default().with_quality(1, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_aspect_ratio() {
        let config = RenderConfig::default().with_resolution(800, 450);
        assert!((config.aspect_ratio() - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: RenderConfig =
            serde_json::from_str(r#"{ "image_width": 64, "samples_per_pixel": 8 }"#).unwrap();
        assert_eq!(config.image_width, 64);
        assert_eq!(config.samples_per_pixel, 8);
        assert_eq!(config.image_height, 225);
        assert_eq!(config.max_depth, 50);
    }
}
