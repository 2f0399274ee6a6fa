use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// Default location of the config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Environment variable that may point at a config file.
pub const CONFIG_PATH_ENV: &str = "MICROSCOPE_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Thresholds used to classify a sample's tradeability.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionThresholds {
    /// Widest acceptable `ask - bid`.
    pub spread_max: f64,
    /// Minimum `|imbalance|` for a directional signal.
    pub imbalance_min: f64,
    /// Minimum volume per unit time.
    pub intensity_min: f64,
}

impl Default for DecisionThresholds {
    fn default() -> Self {
        Self {
            spread_max: 0.05,
            imbalance_min: 0.2,
            intensity_min: 5.0,
        }
    }
}

/// Run configuration. Loaded once per run and handed to components by reference.
///
/// Every key is optional in the file; absent keys (including the whole
/// `[decision_thresholds]` table) take the defaults below.
///
/// ```toml
/// data_source = "manual"
/// max_trade_size = 1000
///
/// [decision_thresholds]
/// spread_max = 0.05
/// imbalance_min = 0.2
/// intensity_min = 5
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the ticks came from (informational).
    pub data_source: String,

    /// Largest order size the caller intends to work (informational).
    pub max_trade_size: f64,

    pub decision_thresholds: DecisionThresholds,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_source: "manual".to_string(),
            max_trade_size: 1000.0,
            decision_thresholds: DecisionThresholds::default(),
        }
    }
}

impl Config {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Load `path`, falling back to [`Config::default`] on any failure.
    ///
    /// Failure is logged at `warn` and never propagated.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(cfg) => {
                info!(path = %path.display(), data_source = %cfg.data_source, "config loaded");
                cfg
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "could not load config file; using defaults"
                );
                Self::default()
            }
        }
    }
}
