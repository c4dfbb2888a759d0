//! Converter configuration.
//!
//! Settings come from three layers, later layers winning:
//!
//! ```text
//! stock defaults  <  config file (--config)  <  command-line flags
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! threshold = 2048   # Max length of the longer edge, in pixels
//! lossless = "copy"  # PNG handling when oversized: "copy" or "resize"
//! ```
//!
//! JPEG output quality is fixed at 100 and is deliberately not an option.
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Default maximum dimension, in pixels.
pub const DEFAULT_THRESHOLD: u32 = 2048;

/// What to do with a PNG whose longer edge exceeds the threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LosslessPolicy {
    /// Copy the original file unresized. Output matches earlier releases
    /// byte for byte, but oversized PNGs stay oversized.
    #[default]
    Copy,
    /// Downsample like JPEGs and write the result as PNG.
    Resize,
}

/// Converter configuration loaded from a TOML file.
///
/// All fields have defaults; config files need only specify the values they
/// want to override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Images whose longer edge is at most this many pixels are passed
    /// through unresized.
    pub threshold: u32,
    /// Handling of oversized PNG files.
    pub lossless: LosslessPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            lossless: LosslessPolicy::default(),
        }
    }
}

/// Values supplied on the command line. `None` keeps the configured value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub threshold: Option<u32>,
    pub lossless: Option<LosslessPolicy>,
}

impl Config {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threshold == 0 {
            return Err(ConfigError::Validation(
                "threshold must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// Apply command-line overrides on top of this config.
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(threshold) = overrides.threshold {
            self.threshold = threshold;
        }
        if let Some(lossless) = overrides.lossless {
            self.lossless = lossless;
        }
        self
    }
}

/// Parse and validate a config from TOML text.
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load a config file, or the stock defaults when no path is given.
///
/// An explicitly named file that does not exist is an error.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => parse_config(&fs::read_to_string(path)?),
        None => Ok(Config::default()),
    }
}

/// Resolve the effective config: file (or defaults), then overrides, then
/// validation of the combined result.
pub fn resolve_config(
    path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<Config, ConfigError> {
    let config = load_config(path)?.with_overrides(overrides);
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock config file.
///
/// Used by the `--gen-config` flag.
pub fn stock_config_toml() -> &'static str {
    r##"# downsample configuration
# ========================
# All settings are optional. Values shown below are the defaults.
# Pass this file with --config; command-line flags override it.
# Unknown keys will cause an error.

# Images whose longer edge is at most this many pixels are copied verbatim.
# Larger images are scaled so the longer edge equals this value.
threshold = 2048

# What to do with PNG files larger than the threshold:
#   "copy"   - copy the original unresized (matches earlier releases)
#   "resize" - downsample and write a new PNG
lossless = "copy"
"##
}
