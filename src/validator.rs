//! Decimal number format checking.
//!
//! The accepted grammar is
//!
//! ```text
//! number    = [ sign ] digits [ separator digits ]
//! sign      = "+" | "-"
//! digits    = 1*( "0" .. "9" )
//! separator = "." | ","
//! ```
//!
//! with nothing before or after it. Matching only establishes the shape;
//! the digit budget (precision), fractional budget (scale) and sign
//! polarity are checked afterwards against a [`ValidatorConfig`].

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

use crate::config::ValidatorConfig;

/// Anchored number grammar.
///
/// `[0-9]` rather than `\d`: the latter matches every Unicode decimal digit.
const NUMBER_PATTERN: &str = r"^([+-])?([0-9]+)(?:([.,])([0-9]+))?$";

fn number_regex() -> &'static Regex {
    static NUMBER: OnceLock<Regex> = OnceLock::new();
    NUMBER.get_or_init(|| {
        Regex::new(NUMBER_PATTERN)
            .unwrap_or_else(|e| panic!("BUG: invalid number pattern: {}", e))
    })
}

/// Leading sign of a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Plus,
    Minus,
}

/// Structure of a string that matched the number grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NumberShape {
    pub sign: Option<Sign>,
    /// Digits before the separator (all digits when there is none).
    pub int_digits: usize,
    /// Digits after the separator, 0 when there is none.
    pub frac_digits: usize,
    pub separator: Option<char>,
}

impl NumberShape {
    /// Digit count that precision is measured against. The sign never counts.
    pub fn total_digits(&self) -> usize {
        self.int_digits + self.frac_digits
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Some(Sign::Minus)
    }
}

/// Match `input` against the number grammar.
///
/// Returns `None` for anything outside the grammar, including the empty
/// string, surrounding whitespace, repeated separators and letters that
/// merely look like digits.
///
/// ```
/// use numval::{number_shape, Sign};
///
/// let shape = number_shape("-12,345").unwrap();
/// assert_eq!(shape.sign, Some(Sign::Minus));
/// assert_eq!((shape.int_digits, shape.frac_digits), (2, 3));
/// assert!(number_shape("12.O4").is_none());
/// ```
pub fn number_shape(input: &str) -> Option<NumberShape> {
    let caps = number_regex().captures(input)?;

    let sign = caps.get(1).map(|m| match m.as_str() {
        "-" => Sign::Minus,
        _ => Sign::Plus,
    });
    // Digit groups are ASCII, so byte length equals digit count.
    let int_digits = caps.get(2).map_or(0, |m| m.len());
    let frac_digits = caps.get(4).map_or(0, |m| m.len());
    let separator = caps.get(3).and_then(|m| m.as_str().chars().next());

    Some(NumberShape {
        sign,
        int_digits,
        frac_digits,
        separator,
    })
}

/// Why an input was not accepted.
///
/// This is an ordinary negative verdict, not an error: checking itself
/// never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rejection {
    /// Input was absent or zero-length.
    Empty,
    /// Input does not match the number grammar.
    Malformed,
    /// More digits in total than precision allows.
    TooManyDigits { digits: usize, precision: u64 },
    /// More fractional digits than scale allows.
    TooManyFractionDigits { digits: usize, scale: u64 },
    /// Leading `-` while only non-negative values are allowed.
    NegativeNotAllowed,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Empty => write!(f, "empty input"),
            Rejection::Malformed => write!(f, "not a decimal number"),
            Rejection::TooManyDigits { digits, precision } => {
                write!(f, "{} digits exceed precision {}", digits, precision)
            }
            Rejection::TooManyFractionDigits { digits, scale } => {
                write!(f, "{} fractional digits exceed scale {}", digits, scale)
            }
            Rejection::NegativeNotAllowed => write!(f, "negative values are not allowed"),
        }
    }
}

impl ValidatorConfig {
    /// Check `input` and report the first rule it breaks.
    ///
    /// Rules run in a fixed order: presence, grammar, precision, scale, sign.
    pub fn check(&self, input: Option<&str>) -> Result<NumberShape, Rejection> {
        let input = match input {
            Some(s) if !s.is_empty() => s,
            _ => return Err(Rejection::Empty),
        };

        let shape = number_shape(input).ok_or(Rejection::Malformed)?;

        let digits = shape.total_digits();
        if digits as u64 > self.precision() {
            return Err(Rejection::TooManyDigits {
                digits,
                precision: self.precision(),
            });
        }

        if shape.frac_digits as u64 > self.scale() {
            return Err(Rejection::TooManyFractionDigits {
                digits: shape.frac_digits,
                scale: self.scale(),
            });
        }

        if self.only_positive() && shape.is_negative() {
            return Err(Rejection::NegativeNotAllowed);
        }

        Ok(shape)
    }

    /// Whether `input` is a number of this shape.
    ///
    /// ```
    /// use numval::ValidatorConfig;
    ///
    /// let config = ValidatorConfig::new(3, 2, true).unwrap();
    /// assert!(config.is_valid(Some("1,23")));
    /// assert!(!config.is_valid(Some("-1.23")));
    /// assert!(!config.is_valid(None));
    /// ```
    pub fn is_valid(&self, input: Option<&str>) -> bool {
        self.check(input).is_ok()
    }
}

/// Free-function form of [`ValidatorConfig::is_valid`].
pub fn is_valid(config: &ValidatorConfig, input: Option<&str>) -> bool {
    config.is_valid(input)
}
