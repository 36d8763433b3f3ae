//! CLI argument definitions for numval.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::Overrides;

#[derive(Parser)]
#[command(name = "numval")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_SHA"), " ", env!("BUILD_DATE"), ")"))]
#[command(about = "Check decimal numbers against a precision/scale shape", long_about = None)]
#[command(
    after_help = "EXAMPLES:\n    numval check --precision 5 --scale 2 12.34 0,5 -1\n    printf '1.5\\n-2\\n' | numval check -p 3 -s 1 --only-positive\n    numval check --config numval.yaml --json 42"
)]
pub struct Cli {
    /// Suppress all non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check values against a number shape
    ///
    /// Values are taken from the command line, or one per line from stdin
    /// when none are given. Exits 0 when every value is valid, 1 when any
    /// value is rejected and 2 when the shape itself is invalid.
    ///
    /// Negative values such as -1.5 can be passed directly. Other values
    /// starting with a hyphen (-0,5) go after `--`.
    Check {
        #[command(flatten)]
        shape: ShapeArgs,
        /// Output results as JSON
        #[arg(long)]
        json: bool,
        /// Values to check
        #[arg(value_name = "VALUE", allow_negative_numbers = true)]
        values: Vec<String>,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Shape options shared by commands that validate numbers.
#[derive(Args, Debug, Clone, Default)]
pub struct ShapeArgs {
    /// Maximum number of digits, integer and fractional parts combined
    #[arg(short, long, allow_hyphen_values = true)]
    pub precision: Option<i64>,
    /// Maximum number of fractional digits [default: 0]
    #[arg(short, long, allow_hyphen_values = true)]
    pub scale: Option<i64>,
    /// Reject values with a leading minus sign
    #[arg(long, conflicts_with = "allow_negative")]
    pub only_positive: bool,
    /// Accept negative values, even if the config file rejects them
    #[arg(long)]
    pub allow_negative: bool,
    /// Read the shape from a YAML config file (flags override its values)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl ShapeArgs {
    /// Flag values as overrides. Without `--only-positive` or
    /// `--allow-negative` the config file's sign setting stays in place.
    pub fn overrides(&self) -> Overrides {
        let only_positive = if self.only_positive {
            Some(true)
        } else if self.allow_negative {
            Some(false)
        } else {
            None
        };

        Overrides {
            precision: self.precision,
            scale: self.scale,
            only_positive,
        }
    }
}
