use clap::Parser;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};

use crate::dates;
use crate::error::{HuntError, Result};

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Predict upcoming car hunts from a hunt log
#[derive(Parser, Debug, Clone)]
#[command(
    name = "car-hunts",
    about = "Predict upcoming car hunts from a hunt log",
    version
)]
pub struct Settings {
    /// Path to the hunt log
    #[arg(default_value = "car_hunts.csv")]
    pub input: PathBuf,

    /// Field delimiter used in the log
    #[arg(long, default_value = "auto", value_parser = ["auto", "comma", "semicolon"])]
    pub delimiter: String,

    /// Reference date for classification (DD.MM.YYYY, defaults to the current date)
    #[arg(long)]
    pub today: Option<String>,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,
}

impl Settings {
    /// Resolve the reference date used to classify predictions.
    ///
    /// Uses the `--today` override when given, otherwise the current local
    /// date. An override that is not `DD.MM.YYYY` is a configuration error.
    pub fn reference_date(&self) -> Result<NaiveDate> {
        match &self.today {
            Some(raw) => dates::parse_date(raw).map_err(|_| {
                HuntError::Config(format!(
                    "invalid --today value '{raw}' (expected DD.MM.YYYY)"
                ))
            }),
            None => Ok(Local::now().date_naive()),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
