//! Configuration management for lookout.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::zone::ZoneType;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default config directory name.
const CONFIG_DIR_NAME: &str = "lookout";

/// Environment variable prefix.
const ENV_PREFIX: &str = "LOOKOUT_";

/// Smallest radius any configuration may allow, in meters.
pub const RADIUS_FLOOR: u32 = 10;

/// Largest radius any configuration may allow, in meters.
pub const RADIUS_CEILING: u32 = 500;

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `LOOKOUT_`, sections split on `__`)
/// 2. TOML config file at `~/.config/lookout/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Editor behaviour.
    pub editor: EditorConfig,
    /// Radius bounds and defaults.
    pub radius: RadiusConfig,
}

/// What the editor does with a radius outside the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadiusPolicy {
    /// Snap to the nearest bound.
    #[default]
    Clamp,
    /// Refuse the update.
    Reject,
}

/// Editor-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Out-of-range radius handling.
    pub radius_policy: RadiusPolicy,
    /// Require a second step before a zone is deleted.
    pub confirm_deletes: bool,
    /// Radius drawn on the map preview when no zone is selected.
    pub preview_fallback_radius: u32,
}

/// Radius bounds and per-type defaults, in meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadiusConfig {
    /// Smallest allowed radius.
    pub min: u32,
    /// Largest allowed radius.
    pub max: u32,
    /// Slider step. Only a hint for the rendering layer.
    pub step: u32,
    /// Radius of a new safe zone.
    pub safe_default: u32,
    /// Radius of a new risk zone.
    pub risk_default: u32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            radius_policy: RadiusPolicy::Clamp,
            confirm_deletes: false,
            preview_fallback_radius: 15,
        }
    }
}

impl Default for RadiusConfig {
    fn default() -> Self {
        Self {
            min: RADIUS_FLOOR,
            max: RADIUS_CEILING,
            step: 10,
            safe_default: 20,
            risk_default: 50,
        }
    }
}

impl RadiusConfig {
    /// Whether `value` is within bounds.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        (i64::from(self.min)..=i64::from(self.max)).contains(&value)
    }

    /// Snap `value` into bounds.
    #[must_use]
    pub fn clamp(&self, value: i64) -> u32 {
        let clamped = value.clamp(i64::from(self.min), i64::from(self.max));
        u32::try_from(clamped).unwrap_or(self.max)
    }

    /// Radius a new draft of `zone_type` starts with.
    #[must_use]
    pub fn default_for(&self, zone_type: ZoneType) -> u32 {
        match zone_type {
            ZoneType::Safe => self.safe_default,
            ZoneType::Risk => self.risk_default,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        let radius = &self.radius;

        if radius.min >= radius.max {
            return Err(Error::ConfigValidation {
                message: format!(
                    "radius.min ({}) must be below radius.max ({})",
                    radius.min, radius.max
                ),
            });
        }

        if radius.min < RADIUS_FLOOR || radius.max > RADIUS_CEILING {
            return Err(Error::ConfigValidation {
                message: format!(
                    "radius bounds {}-{} must lie within {RADIUS_FLOOR}-{RADIUS_CEILING}",
                    radius.min, radius.max
                ),
            });
        }

        if radius.step == 0 {
            return Err(Error::ConfigValidation {
                message: "radius.step must be greater than 0".to_string(),
            });
        }

        for (name, value) in [
            ("radius.safe_default", radius.safe_default),
            ("radius.risk_default", radius.risk_default),
        ] {
            if !radius.contains(i64::from(value)) {
                return Err(Error::ConfigValidation {
                    message: format!(
                        "{name} ({value}) is outside {}-{}",
                        radius.min, radius.max
                    ),
                });
            }
        }

        if self.editor.preview_fallback_radius == 0 {
            return Err(Error::ConfigValidation {
                message: "editor.preview_fallback_radius must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}
