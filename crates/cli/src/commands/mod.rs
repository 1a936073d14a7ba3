//! Command handlers

pub mod demo;
pub mod rates;

use crate::OutputFormat;
use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDateTime};
use serde::Serialize;

const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse `--at`, falling back to the local clock when absent
pub fn parse_timestamp(at: Option<&str>) -> Result<NaiveDateTime> {
    let Some(raw) = at else {
        return Ok(Local::now().naive_local());
    };

    let raw = raw.trim();
    for format in TIMESTAMP_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(parsed);
        }
    }

    bail!("Invalid timestamp '{}', expected YYYY-MM-DDTHH:MM[:SS]", raw)
}

/// Print a value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to encode JSON output")?;
    println!("{}", json);
    Ok(())
}

/// Print either the text rendering or the JSON form of `value`
pub fn emit<T: Serialize>(format: OutputFormat, value: &T, text: impl FnOnce()) -> Result<()> {
    match format {
        OutputFormat::Text => {
            text();
            Ok(())
        }
        OutputFormat::Json => print_json(value),
    }
}
