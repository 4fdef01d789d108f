//! CounterKit Settings Crate
//!
//! Handles designer configuration and its persistence.

pub mod config;
pub mod error;

pub use config::{default_config_path, Config, DesignerSettings, EstimateSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
