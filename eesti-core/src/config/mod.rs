//! Configuration
//!
//! Formatting defaults loaded from ~/.config/eesti/config.toml
//! (`EESTI_CONFIG` overrides the path).

use crate::error::{EestiError, EestiResult};
use crate::lang::TimeStyle;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Upper bound on spoken decimal places
pub const MAX_DECIMAL_PLACES: usize = 15;

/// Number formatting defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberConfig {
    /// Spoken fractions ("4 ja pool") instead of "4 1/2"
    #[serde(default = "default_speech")]
    pub speech: bool,

    /// Decimal digits spoken after "koma"
    #[serde(default = "default_places")]
    pub places: usize,

    /// Denominators tried by `nice_number`
    #[serde(default = "default_denominators")]
    pub denominators: Vec<u32>,
}

fn default_speech() -> bool {
    true
}

fn default_places() -> usize {
    2
}

fn default_denominators() -> Vec<u32> {
    (1..=20).collect()
}

impl Default for NumberConfig {
    fn default() -> Self {
        Self {
            speech: default_speech(),
            places: default_places(),
            denominators: default_denominators(),
        }
    }
}

/// Complete configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Number formatting
    #[serde(default)]
    pub number: NumberConfig,
    /// Time formatting
    #[serde(default)]
    pub time: TimeStyle,
}

impl FormatConfig {
    /// Load the user configuration, falling back to defaults when absent
    pub fn load() -> EestiResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::info!("Config file not found, using defaults: {:?}", config_path);
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load from an explicit path; the file must exist
    pub fn load_from(path: &Path) -> EestiResult<Self> {
        if !path.exists() {
            return Err(EestiError::ConfigNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| EestiError::ConfigParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        config.validate()?;

        tracing::info!("Loaded config: {:?}", path);
        tracing::debug!(
            "places={}, denominators={:?}, time={:?}",
            config.number.places,
            config.number.denominators,
            config.time
        );
        Ok(config)
    }

    /// Save to the user configuration path
    pub fn save(&self) -> EestiResult<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    /// Save to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> EestiResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| EestiError::ConfigSerialize(e.to_string()))?;
        std::fs::write(path, content)?;

        tracing::info!("Saved config: {:?}", path);
        Ok(())
    }

    /// Reject values the formatters cannot use
    pub fn validate(&self) -> EestiResult<()> {
        if self.number.places > MAX_DECIMAL_PLACES {
            return Err(EestiError::InvalidConfig {
                field: "number.places".to_string(),
                reason: format!("{} > {}", self.number.places, MAX_DECIMAL_PLACES),
            });
        }

        if self.number.denominators.contains(&0) {
            return Err(EestiError::InvalidConfig {
                field: "number.denominators".to_string(),
                reason: "denominator 0".to_string(),
            });
        }

        Ok(())
    }

    /// Configuration file path
    pub fn config_path() -> EestiResult<PathBuf> {
        if let Ok(path) = std::env::var("EESTI_CONFIG") {
            return Ok(PathBuf::from(path));
        }

        let config_dir = dirs::config_dir().ok_or(EestiError::ConfigDirUnavailable)?;
        Ok(config_dir.join("eesti").join("config.toml"))
    }
}
