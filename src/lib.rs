//! # numval - decimal number shape validation
//!
//! Decides whether a string is a decimal number of a given shape: at most
//! `precision` significant digits, at most `scale` of them fractional, and
//! optionally non-negative. The answer is a verdict only; no numeric value
//! is ever produced.
//!
//! ## Modules
//!
//! - [`config`] - The validated precision/scale/sign triple and YAML loading
//! - [`validator`] - Number grammar and the format checker
//! - [`cli`] - Command-line argument definitions for the `numval` binary
//!
//! ## Example
//!
//! ```
//! use numval::{ConfigError, ValidatorConfig};
//!
//! let config = ValidatorConfig::new(4, 3, true).unwrap();
//! assert!(config.is_valid(Some("0.00")));
//! assert!(!config.is_valid(Some("-0.00")));
//! assert!(!config.is_valid(Some("12.O4")));
//!
//! assert_eq!(
//!     ValidatorConfig::new(-1, 2, true),
//!     Err(ConfigError::InvalidPrecision { precision: -1 })
//! );
//! ```

pub mod cli;
pub mod config;
pub mod validator;

pub use config::{ConfigError, Overrides, ValidatorConfig};
pub use validator::{is_valid, number_shape, NumberShape, Rejection, Sign};

/// Default config file looked up in the working directory: `numval.yaml`
pub const DEFAULT_CONFIG_FILE: &str = "numval.yaml";
