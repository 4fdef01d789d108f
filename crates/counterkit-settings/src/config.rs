//! Configuration and settings management for CounterKit
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Designer settings (zoom limits, grid, history depth)
//! - Estimate settings (tax, fallback and per-material prices)

pub use counterkit_core::units::MeasurementSystem;
use counterkit_core::constants::{
    DEFAULT_ZOOM, GRID_UNIT, MAX_BORDER_RADIUS, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

const APP_DIR: &str = "counterkit";
const CONFIG_FILE: &str = "config.toml";

/// Layout editor preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignerSettings {
    pub initial_zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Factor applied per zoom in/out step
    pub zoom_step: f64,
    /// Grid spacing in layout units
    pub grid_unit: f64,
    pub show_grid: bool,
    pub snap_to_grid: bool,
    /// Undo entries to keep; unset keeps all of them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_history_depth: Option<usize>,
    pub max_border_radius: f64,
}

impl Default for DesignerSettings {
    fn default() -> Self {
        Self {
            initial_zoom: DEFAULT_ZOOM,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            zoom_step: ZOOM_STEP,
            grid_unit: GRID_UNIT,
            show_grid: true,
            snap_to_grid: false,
            max_history_depth: None,
            max_border_radius: MAX_BORDER_RADIUS,
        }
    }
}

/// Pricing inputs for layout estimates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateSettings {
    pub tax_rate: f64,
    /// Price per square foot for materials not listed in `materials`
    pub default_price_per_sq_ft: f64,
    pub finish_multiplier: f64,
    /// Material name to price per square foot
    pub materials: HashMap<String, f64>,
}

impl Default for EstimateSettings {
    fn default() -> Self {
        Self {
            tax_rate: 0.18,
            default_price_per_sq_ft: 50.0,
            finish_multiplier: 1.0,
            materials: HashMap::new(),
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Units used for display
    pub measurement_system: MeasurementSystem,
    /// Designer preferences
    pub designer: DesignerSettings,
    /// Estimate pricing
    pub estimate: EstimateSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> ConfigResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from `path`, falling back to defaults when the file does
    /// not exist.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if !path.exists() {
            tracing::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| SettingsError::ConfigDirectory(e.to_string()))?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let d = &self.designer;
        if !(d.min_zoom.is_finite() && d.min_zoom > 0.0) {
            return Err(ConfigError::out_of_range("designer.min_zoom", d.min_zoom));
        }
        if !(d.max_zoom.is_finite() && d.max_zoom >= d.min_zoom) {
            return Err(ConfigError::out_of_range("designer.max_zoom", d.max_zoom));
        }
        if !(d.initial_zoom >= d.min_zoom && d.initial_zoom <= d.max_zoom) {
            return Err(ConfigError::out_of_range(
                "designer.initial_zoom",
                d.initial_zoom,
            ));
        }
        if !(d.zoom_step.is_finite() && d.zoom_step > 1.0) {
            return Err(ConfigError::out_of_range("designer.zoom_step", d.zoom_step));
        }
        if !(d.grid_unit.is_finite() && d.grid_unit > 0.0) {
            return Err(ConfigError::out_of_range("designer.grid_unit", d.grid_unit));
        }
        if !(d.max_border_radius.is_finite() && d.max_border_radius >= 0.0) {
            return Err(ConfigError::out_of_range(
                "designer.max_border_radius",
                d.max_border_radius,
            ));
        }

        let e = &self.estimate;
        if !(e.tax_rate.is_finite() && e.tax_rate >= 0.0) {
            return Err(ConfigError::out_of_range("estimate.tax_rate", e.tax_rate));
        }
        if !(e.default_price_per_sq_ft.is_finite() && e.default_price_per_sq_ft >= 0.0) {
            return Err(ConfigError::out_of_range(
                "estimate.default_price_per_sq_ft",
                e.default_price_per_sq_ft,
            ));
        }
        if !(e.finish_multiplier.is_finite() && e.finish_multiplier > 0.0) {
            return Err(ConfigError::out_of_range(
                "estimate.finish_multiplier",
                e.finish_multiplier,
            ));
        }
        if let Some((name, price)) = e
            .materials
            .iter()
            .find(|(_, price)| !(price.is_finite() && **price >= 0.0))
        {
            return Err(ConfigError::out_of_range(
                &format!("estimate.materials.{}", name),
                price,
            ));
        }

        Ok(())
    }
}

/// Platform config file location, e.g. `~/.config/counterkit/config.toml`.
pub fn default_config_path() -> ConfigResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
        .ok_or_else(|| ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.designer.min_zoom, 0.1);
        assert_eq!(config.designer.max_zoom, 5.0);
        assert_eq!(config.designer.max_history_depth, None);
        assert_eq!(config.estimate.tax_rate, 0.18);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::new();
        config.designer.grid_unit = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange { ref key, .. }) if key == "designer.grid_unit"
        ));

        let mut config = Config::new();
        config.designer.initial_zoom = 9.0;
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.estimate.materials.insert("granite".into(), -5.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            measurement_system = "metric"

            [designer]
            snap_to_grid = true
            max_history_depth = 50
            "#,
        )
        .unwrap();
        assert_eq!(config.measurement_system, MeasurementSystem::Metric);
        assert!(config.designer.snap_to_grid);
        assert_eq!(config.designer.max_history_depth, Some(50));
        assert_eq!(config.designer.grid_unit, 20.0);
        assert_eq!(config.estimate, EstimateSettings::default());
    }

    #[test]
    fn test_default_config_path_shape() {
        if let Ok(path) = default_config_path() {
            assert!(path.ends_with("counterkit/config.toml"));
        }
    }
}
