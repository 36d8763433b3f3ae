//! Merging of per-field overrides over an optional base config.

use anyhow::Result;

use super::ValidatorConfig;

/// Optional per-field values, typically taken from command-line flags.
///
/// Fields left as `None` fall back to the base config, then to the
/// defaults (`scale = 0`, `only_positive = false`). Precision has no default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub precision: Option<i64>,
    pub scale: Option<i64>,
    pub only_positive: Option<bool>,
}

impl Overrides {
    /// Resolve the overrides against `base` into a validated config.
    pub fn resolve(&self, base: Option<&ValidatorConfig>) -> Result<ValidatorConfig> {
        let precision = match (self.precision, base) {
            (Some(precision), _) => precision,
            (None, Some(base)) => base.precision as i64,
            (None, None) => {
                anyhow::bail!("precision is required (pass --precision or set it in a config file)")
            }
        };
        let scale = self
            .scale
            .or_else(|| base.map(|b| b.scale as i64))
            .unwrap_or(0);
        let only_positive = self
            .only_positive
            .or_else(|| base.map(|b| b.only_positive))
            .unwrap_or(false);

        Ok(ValidatorConfig::new(precision, scale, only_positive)?)
    }
}
