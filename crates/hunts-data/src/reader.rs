//! Hunt log ingestion.
//!
//! Reads a delimiter-separated hunt log where each record is a `DD.MM.YYYY`
//! date followed by the names of the cars hunted on that date, and produces
//! a name → dates mapping for the classifier.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use hunts_core::dates;
use hunts_core::error::{HuntError, Result};
use tracing::debug;

// ── Public API ────────────────────────────────────────────────────────────────

/// Read the hunt log at `path` into a name → hunt dates mapping.
///
/// * `delimiter` – `"comma"`, `"semicolon"`, or `"auto"` to sniff the first
///   non-blank line.
///
/// Dates are appended in file order; the log is not assumed to be sorted and
/// is never re-sorted here. Empty fields are skipped, so trailing delimiters
/// do not create a car named `""`. A malformed date aborts the whole run;
/// the log is assumed internally consistent and a bad date means corruption.
///
/// The `BTreeMap` keying gives downstream consumers a deterministic,
/// name-sorted iteration order.
pub fn read_hunt_log(path: &Path, delimiter: &str) -> Result<BTreeMap<String, Vec<NaiveDate>>> {
    let raw = std::fs::read_to_string(path).map_err(|source| HuntError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let delim = resolve_delimiter(delimiter, &raw)?;
    let cars = parse_records(&raw, delim)?;

    debug!(
        "Read {} cars from {} (delimiter '{}')",
        cars.len(),
        path.display(),
        delim as char
    );

    Ok(cars)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Map the delimiter setting to a concrete byte, sniffing when set to `auto`.
fn resolve_delimiter(setting: &str, sample: &str) -> Result<u8> {
    match setting {
        "comma" => Ok(b','),
        "semicolon" => Ok(b';'),
        "auto" => Ok(sniff_delimiter(sample)),
        other => Err(HuntError::Config(format!(
            "unrecognised delimiter: {other}"
        ))),
    }
}

/// Guess the delimiter from the first non-blank line.
///
/// Semicolons win when they outnumber commas; otherwise comma is assumed,
/// which also covers single-field records and empty files.
fn sniff_delimiter(sample: &str) -> u8 {
    let line = sample
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("");
    let semicolons = line.matches(';').count();
    let commas = line.matches(',').count();
    if semicolons > commas {
        b';'
    } else {
        b','
    }
}

/// Split the raw log into records and accumulate dates per car name.
fn parse_records(raw: &str, delim: u8) -> Result<BTreeMap<String, Vec<NaiveDate>>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delim)
        .has_headers(false)
        .flexible(true)
        .from_reader(raw.as_bytes());

    let mut cars: BTreeMap<String, Vec<NaiveDate>> = BTreeMap::new();

    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let record_no = index + 1;

        // Empty fields carry no information: a trailing delimiter must not
        // become a car named "" and a leading one must not shift the date.
        let mut fields = record.iter().filter(|field| !field.is_empty());

        let Some(date_field) = fields.next() else {
            // Record consists solely of delimiters; nothing was observed.
            continue;
        };

        let date = dates::parse_date(date_field).map_err(|_| HuntError::DateParse {
            record: record_no,
            value: date_field.to_string(),
        })?;

        for name in fields {
            cars.entry(name.to_string()).or_default().push(date);
        }
    }

    Ok(cars)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
