//! Numeric shape configuration.
//!
//! A [`ValidatorConfig`] fixes the shape a decimal string must have: at most
//! `precision` digits in total, at most `scale` of them after the separator,
//! and optionally no leading minus sign. The triple is validated once, at
//! construction, and never changes afterwards.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

pub mod overrides;

pub use overrides::Overrides;

/// Errors raised when a precision/scale/sign triple is self-contradictory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Precision is zero or negative.
    InvalidPrecision { precision: i64 },
    /// Scale is negative, or not strictly below precision.
    InvalidScale { precision: i64, scale: i64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPrecision { precision } => {
                write!(f, "precision must be a positive number, got {}", precision)
            }
            ConfigError::InvalidScale { precision, scale } => write!(
                f,
                "scale must be non-negative and less than precision ({}), got {}",
                precision, scale
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Wire form of a config, as found in YAML files.
///
/// Never handed out directly; every deserialized value goes through
/// [`ValidatorConfig::new`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawConfig {
    precision: i64,
    #[serde(default)]
    scale: i64,
    #[serde(default)]
    only_positive: bool,
}

/// Immutable precision/scale/sign triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawConfig", into = "RawConfig")]
pub struct ValidatorConfig {
    precision: u64,
    scale: u64,
    only_positive: bool,
}

impl ValidatorConfig {
    /// Create a configuration, failing fast on an invalid triple.
    ///
    /// Precision is checked before scale, so `(0, 5, _)` reports
    /// [`ConfigError::InvalidPrecision`].
    pub fn new(precision: i64, scale: i64, only_positive: bool) -> Result<Self, ConfigError> {
        if precision <= 0 {
            return Err(ConfigError::InvalidPrecision { precision });
        }
        if scale < 0 || scale >= precision {
            return Err(ConfigError::InvalidScale { precision, scale });
        }

        // Both values are positive (or zero) i64 here, so the casts are lossless.
        Ok(Self {
            precision: precision as u64,
            scale: scale as u64,
            only_positive,
        })
    }

    /// Maximum number of digits, integer and fractional parts combined.
    pub fn precision(&self) -> u64 {
        self.precision
    }

    /// Maximum number of digits after the separator.
    pub fn scale(&self) -> u64 {
        self.scale
    }

    /// Whether a leading `-` is rejected.
    pub fn only_positive(&self) -> bool {
        self.only_positive
    }

    /// Load a configuration from a YAML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Invalid config in {}", path.display()))
    }

    /// Parse a configuration from YAML text.
    ///
    /// ```
    /// use numval::ValidatorConfig;
    ///
    /// let config = ValidatorConfig::parse("precision: 5\nscale: 2\n").unwrap();
    /// assert_eq!(config.precision(), 5);
    /// assert!(!config.only_positive());
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse number format config")
    }
}

impl TryFrom<RawConfig> for ValidatorConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Self::new(raw.precision, raw.scale, raw.only_positive)
    }
}

impl From<ValidatorConfig> for RawConfig {
    fn from(config: ValidatorConfig) -> Self {
        // Construction caps both fields at i64::MAX.
        Self {
            precision: config.precision as i64,
            scale: config.scale as i64,
            only_positive: config.only_positive,
        }
    }
}

impl fmt::Display for ValidatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "precision={} scale={}", self.precision, self.scale)?;
        if self.only_positive {
            write!(f, " only-positive")?;
        }
        Ok(())
    }
}
