//! CSV import of monthly observations.
//!
//! Accepts any CSV with a year, month and variance column. Column names are
//! matched case-insensitively against a few common aliases, so exports like
//! `Year,Month,Anomaly` load without a schema.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use super::{Dataset, Observation};
use crate::error::{Error, Result};

const YEAR_ALIASES: &[&str] = &["year", "yr"];
const MONTH_ALIASES: &[&str] = &["month", "mon", "mo"];
const VARIANCE_ALIASES: &[&str] = &["variance", "anomaly", "delta", "deviation"];

/// Imports observations from a CSV file. The CSV carries no base temperature,
/// so the caller supplies it.
pub fn import_csv(path: impl AsRef<Path>, base_temperature: f64) -> Result<Dataset> {
    let path = path.as_ref();
    let reader = csv::Reader::from_path(path)?;
    let observations = read_observations(reader)?;
    debug!(path = %path.display(), rows = observations.len(), "Imported CSV observations");
    Ok(Dataset::new(base_temperature, observations))
}

fn read_observations<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<Observation>> {
    let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();
    let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();

    let year_idx = find_column(&header_refs, YEAR_ALIASES, "year")?;
    let month_idx = find_column(&header_refs, MONTH_ALIASES, "month")?;
    let variance_idx = find_column(&header_refs, VARIANCE_ALIASES, "variance")?;

    let mut observations = Vec::new();

    for (line_num, record) in reader.records().enumerate() {
        // +2 for 1-based and header
        let line = line_num + 2;
        let record = record.map_err(|e| Error::CsvImport {
            line,
            reason: e.to_string(),
        })?;

        let year = record.get(year_idx).unwrap_or("").trim();
        if year.is_empty() {
            continue;
        }

        observations.push(Observation {
            year: parse_field(year, "year", line)?,
            month: parse_field(record.get(month_idx).unwrap_or("").trim(), "month", line)?,
            variance: parse_field(
                record.get(variance_idx).unwrap_or("").trim(),
                "variance",
                line,
            )?,
        });
    }

    Ok(observations)
}

fn find_column(headers: &[&str], aliases: &[&str], what: &str) -> Result<usize> {
    aliases
        .iter()
        .find_map(|alias| find_header_index(headers, alias))
        .ok_or_else(|| Error::CsvImport {
            line: 0,
            reason: format!("Could not find {what} column"),
        })
}

fn parse_field<T: std::str::FromStr>(value: &str, what: &str, line: usize) -> Result<T> {
    value.parse().map_err(|_| Error::CsvImport {
        line,
        reason: format!("invalid {what}: {value:?}"),
    })
}

/// Find a header index by name (case-insensitive).
fn find_header_index(headers: &[&str], name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim().eq_ignore_ascii_case(name))
}
