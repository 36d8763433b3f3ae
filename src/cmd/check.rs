//! `numval check`: validate values against a number shape.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::io::{self, BufRead};
use std::path::Path;

use numval::cli::ShapeArgs;
use numval::{NumberShape, Rejection, ValidatorConfig, DEFAULT_CONFIG_FILE};

/// A value to check, as read from the command line or stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputValue {
    Text(String),
    /// A stdin line that is not UTF-8, kept in lossy form for display.
    NotUtf8(String),
}

/// Verdict for a single input value.
#[derive(Debug, Clone, Serialize)]
pub struct CheckRecord {
    pub input: String,
    pub valid: bool,
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<Rejection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<NumberShape>,
}

impl CheckRecord {
    fn new(input: String, verdict: Result<NumberShape, Rejection>) -> Self {
        match verdict {
            Ok(shape) => Self {
                input,
                valid: true,
                reason: None,
                rejection: None,
                shape: Some(shape),
            },
            Err(rejection) => Self {
                input,
                valid: false,
                reason: Some(rejection.to_string()),
                rejection: Some(rejection),
                shape: None,
            },
        }
    }
}

/// Build the config from `--config` (or `numval.yaml` in the working
/// directory, when present) with flag overrides on top.
pub fn resolve_config(args: &ShapeArgs) -> Result<ValidatorConfig> {
    let base = match &args.config {
        Some(path) => Some(ValidatorConfig::load_from(path)?),
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            Some(ValidatorConfig::load_from(Path::new(DEFAULT_CONFIG_FILE))?)
        }
        None => None,
    };

    args.overrides().resolve(base.as_ref())
}

/// Check every value, keeping input order.
pub fn check_values(config: &ValidatorConfig, values: &[InputValue]) -> Vec<CheckRecord> {
    values
        .iter()
        .map(|value| match value {
            InputValue::Text(text) => CheckRecord::new(text.clone(), config.check(Some(text))),
            InputValue::NotUtf8(lossy) => {
                CheckRecord::new(lossy.clone(), Err(Rejection::Malformed))
            }
        })
        .collect()
}

/// Read one value per line. `\n` and `\r\n` terminators are dropped,
/// nothing else is. Lines that are not UTF-8 are kept as [`InputValue::NotUtf8`].
fn read_values(reader: impl BufRead) -> Result<Vec<InputValue>> {
    reader
        .split(b'\n')
        .map(|line| {
            let mut line = line?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            Ok(match String::from_utf8(line) {
                Ok(text) => InputValue::Text(text),
                Err(e) => InputValue::NotUtf8(String::from_utf8_lossy(e.as_bytes()).into_owned()),
            })
        })
        .collect::<io::Result<Vec<_>>>()
        .context("Failed to read values from stdin")
}

fn display_record(record: &CheckRecord) {
    if record.valid {
        println!("{} {}", "✓".green(), record.input);
    } else {
        println!(
            "{} {}: {}",
            "✗".red(),
            record.input.bold(),
            record.reason.as_deref().unwrap_or_default()
        );
    }
}

/// Run the check command. Returns whether every value was valid.
///
/// Config problems surface as errors; rejected values do not.
pub fn run(args: &ShapeArgs, values: Vec<String>, json: bool, quiet: bool) -> Result<bool> {
    let config = resolve_config(args)?;

    let values = if values.is_empty() {
        read_values(io::stdin().lock())?
    } else {
        values.into_iter().map(InputValue::Text).collect()
    };

    let records = check_values(&config, &values);
    let all_valid = records.iter().all(|r| r.valid);

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else if !quiet {
        for record in &records {
            display_record(record);
        }
        let rejected = records.iter().filter(|r| !r.valid).count();
        if rejected > 0 {
            eprintln!(
                "{} {} of {} value(s) rejected ({})",
                "✗".red(),
                rejected,
                records.len(),
                config
            );
        }
    }

    Ok(all_valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(values: &[&str]) -> Vec<InputValue> {
        values.iter().map(|v| InputValue::Text(v.to_string())).collect()
    }

    #[test]
    fn test_check_values_keeps_order_and_reasons() {
        let config = ValidatorConfig::new(3, 2, true).unwrap();
        let records = check_values(&config, &texts(&["1.23", "-1.23", "1,23", "1.2.3"]));

        let verdicts: Vec<bool> = records.iter().map(|r| r.valid).collect();
        assert_eq!(verdicts, vec![true, false, true, false]);
        assert_eq!(
            records[1].reason.as_deref(),
            Some("negative values are not allowed")
        );
        assert_eq!(records[3].reason.as_deref(), Some("not a decimal number"));
        assert_eq!(records[2].shape.map(|s| s.separator), Some(Some(',')));
    }

    #[test]
    fn test_read_values_strips_only_line_endings() {
        let values = read_values("1.5\n 2\r\n-3\n".as_bytes()).unwrap();
        assert_eq!(values, texts(&["1.5", " 2", "-3"]));
    }

    #[test]
    fn test_resolve_config_from_file_with_overrides() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("shape.yaml");
        std::fs::write(&path, "precision: 8\nscale: 2\nonly_positive: true\n").unwrap();

        let args = ShapeArgs {
            scale: Some(4),
            config: Some(path),
            ..Default::default()
        };
        let config = resolve_config(&args).unwrap();
        assert_eq!(config, ValidatorConfig::new(8, 4, true).unwrap());
    }

    #[test]
    fn test_record_json_shape() {
        let config = ValidatorConfig::new(4, 2, false).unwrap();
        let records = check_values(&config, &texts(&["-1.5", "abc"]));
        let json = serde_json::to_value(&records).unwrap();

        assert_eq!(json[0]["valid"], true);
        assert_eq!(json[0]["reason"], serde_json::Value::Null);
        assert_eq!(json[0]["shape"]["sign"], "minus");
        assert_eq!(json[0]["shape"]["int_digits"], 1);
        assert_eq!(json[1]["valid"], false);
        assert_eq!(json[1]["reason"], "not a decimal number");
        assert_eq!(json[1]["rejection"]["kind"], "malformed");
        assert!(json[0].get("rejection").is_none());
        assert!(json[1].get("shape").is_none());
    }

    #[test]
    fn test_rejection_record_carries_limits() {
        let config = ValidatorConfig::new(3, 1, true).unwrap();
        let records = check_values(&config, &texts(&["1.25"]));
        assert_eq!(
            records[0].rejection,
            Some(Rejection::TooManyFractionDigits {
                digits: 2,
                scale: 1
            })
        );
    }

    #[test]
    fn test_read_values_keeps_non_utf8_lines() {
        let values = read_values(&b"1\xff\n2\r\n"[..]).unwrap();
        assert_eq!(
            values,
            vec![
                InputValue::NotUtf8("1\u{FFFD}".to_string()),
                InputValue::Text("2".to_string()),
            ]
        );
    }

    #[test]
    fn test_non_utf8_line_is_malformed() {
        let config = ValidatorConfig::new(3, 0, false).unwrap();
        let values = vec![
            InputValue::NotUtf8("1\u{FFFD}".to_string()),
            InputValue::Text("2".to_string()),
        ];
        let records = check_values(&config, &values);
        assert_eq!(records[0].rejection, Some(Rejection::Malformed));
        assert!(records[1].valid);
    }
}
