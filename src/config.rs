//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`RVL_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use revolve_core::{EditorSettings, OrbitParams};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,
    /// Editor configuration
    #[serde(default)]
    pub editor: EditorConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`RVL_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // RVL_EDITOR__RESOLUTION=25 -> editor.resolution = 25
        figment = figment.merge(Env::prefixed("RVL_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Load configuration, falling back to defaults with a logged warning
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Starting distance from the origin
    pub distance: f32,
    /// Closest allowed zoom
    pub min_distance: f32,
    /// Farthest allowed zoom
    pub max_distance: f32,
    /// Starting azimuth in degrees
    pub theta: f32,
    /// Starting elevation in degrees
    pub phi: f32,
    /// Field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: 5.0,
            min_distance: 1.0,
            max_distance: 30.0,
            theta: 45.0,
            phi: 45.0,
            fov: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl CameraConfig {
    /// Convert to the camera's parameter struct (angles to radians)
    pub fn to_orbit_params(&self) -> OrbitParams {
        OrbitParams {
            distance: self.distance,
            min_distance: self.min_distance,
            max_distance: self.max_distance,
            theta: self.theta.to_radians(),
            phi: self.phi.to_radians(),
            fov: self.fov,
            near: self.near,
            far: self.far,
        }
    }
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Orbit speed in radians per normalized viewport unit dragged
    pub orbit_sensitivity: f32,
    /// Zoom distance per scroll unit
    pub zoom_step: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            orbit_sensitivity: 1.5,
            zoom_step: 0.5,
        }
    }
}

/// Editor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Curve sample count (>= 1)
    pub resolution: u32,
    /// Control point size in pixels
    pub point_size: f32,
    /// Angular divisions for surfaces of revolution
    pub sections: u32,
    /// Start with the centered seed quad instead of an empty canvas
    pub seed_quad: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            resolution: 10,
            point_size: 5.0,
            sections: 16,
            seed_quad: true,
        }
    }
}

impl EditorConfig {
    /// Convert to the editor's runtime settings
    pub fn to_settings(&self) -> EditorSettings {
        EditorSettings {
            resolution: self.resolution,
            point_size: self.point_size,
            sections: self.sections,
            ..Default::default()
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.camera.distance, 5.0);
        assert_eq!(config.editor.resolution, 10);
        assert!(config.editor.seed_quad);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("distance"));
        assert!(toml.contains("resolution"));
    }

    #[test]
    fn test_orbit_params_are_radians() {
        let config = CameraConfig::default();
        let params = config.to_orbit_params();
        assert!((params.theta - std::f32::consts::FRAC_PI_4).abs() < 0.0001);
        assert!((params.phi - std::f32::consts::FRAC_PI_4).abs() < 0.0001);
    }

    #[test]
    fn test_editor_settings_carry_config_values() {
        let config = EditorConfig {
            resolution: 42,
            point_size: 12.0,
            sections: 24,
            seed_quad: false,
        };
        let settings = config.to_settings();
        assert_eq!(settings.resolution, 42);
        assert_eq!(settings.point_size, 12.0);
        assert_eq!(settings.sections, 24);
    }
}
