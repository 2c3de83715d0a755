//! Main analysis pipeline for the car-hunts report.
//!
//! Orchestrates log ingestion and classification, returning a
//! [`HuntAnalysis`] ready for the report layer.

use std::path::Path;

use chrono::NaiveDate;
use hunts_core::error::Result;
use hunts_core::models::Classification;
use tracing::debug;

use crate::classifier::classify;
use crate::reader::read_hunt_log;

// ── Public types ──────────────────────────────────────────────────────────────

/// Metadata produced alongside the classification.
#[derive(Debug, Clone)]
pub struct AnalysisMetadata {
    /// ISO-8601 timestamp when this result was generated.
    pub generated_at: String,
    /// Number of distinct cars found in the log.
    pub cars_total: usize,
    /// Wall-clock seconds spent reading and parsing the log.
    pub load_time_seconds: f64,
}

/// The complete output of [`analyze_hunts`].
#[derive(Debug, Clone)]
pub struct HuntAnalysis {
    /// The three-way partition of all cars.
    pub classification: Classification,
    /// Metadata about this analysis run.
    pub metadata: AnalysisMetadata,
}

// ── Public function ───────────────────────────────────────────────────────────

/// Run the full analysis pipeline.
///
/// 1. Read the hunt log at `path` into a name → dates mapping.
/// 2. Classify every car against the injected `today` reference date.
/// 3. Return the classification plus run metadata.
///
/// `today` is passed in rather than read from the clock so that reports are
/// reproducible and testable.
pub fn analyze_hunts(path: &Path, delimiter: &str, today: NaiveDate) -> Result<HuntAnalysis> {
    let load_start = std::time::Instant::now();
    let cars = read_hunt_log(path, delimiter)?;
    let load_time = load_start.elapsed().as_secs_f64();

    let cars_total = cars.len();
    let classification = classify(&cars, today);

    debug!(
        "Classified {} cars: {} once, {} upcoming, {} due",
        cars_total,
        classification.once.len(),
        classification.upcoming.len(),
        classification.due.len()
    );

    Ok(HuntAnalysis {
        classification,
        metadata: AnalysisMetadata {
            generated_at: chrono::Utc::now().to_rfc3339(),
            cars_total,
            load_time_seconds: load_time,
        },
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
