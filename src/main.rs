use std::process::ExitCode;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use meanstd::input;
use meanstd::report;
use meanstd::settings::Settings;
use meanstd::statistics;

fn main() -> ExitCode {
    // stdout is reserved for the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            debug!(error = %e, "could not load settings");
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let dataset = match input::read_file(settings.input()) {
        Ok(dataset) => dataset,
        Err(e) => {
            debug!(error = %e, "could not read input");
            eprintln!("Error reading file: {e}");
            return ExitCode::FAILURE;
        }
    };

    let summary = statistics::summarize(&dataset);
    info!(%summary, "done");
    print!("{}", report::render(&summary, settings.decimal_separator()));
    ExitCode::SUCCESS
}
