mod bootstrap;

use anyhow::Result;
use clap::Parser;
use hunts_core::settings::Settings;
use hunts_data::analysis::analyze_hunts;
use hunts_report::table::render_report;

fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("car-hunts v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Log: {}, delimiter: {}",
        settings.input.display(),
        settings.delimiter
    );

    let today = settings.reference_date()?;
    let analysis = analyze_hunts(&settings.input, &settings.delimiter, today)?;

    tracing::info!(
        "Classified {} cars in {:.3}s ({} once, {} upcoming, {} due)",
        analysis.metadata.cars_total,
        analysis.metadata.load_time_seconds,
        analysis.classification.once.len(),
        analysis.classification.upcoming.len(),
        analysis.classification.due.len()
    );

    let stdout = std::io::stdout();
    render_report(&mut stdout.lock(), &analysis.classification)?;

    Ok(())
}
