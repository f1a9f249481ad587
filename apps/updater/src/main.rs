//! PricePilot rates updater.
//!
//! One run: fetch the upstream rates with endpoint fallback, normalize into
//! the snapshot, overwrite `rates.json`, exit 0. On any fatal error the same
//! file receives a `{"success": false, ...}` document and the process exits
//! non-zero, so downstream consumers always find a self-contained snapshot.

use std::process::ExitCode;

use log::{error, info};
use pricepilot_rates::{normalize, RatesError, RatesFetcher, RatesSnapshot, UpdaterConfig};

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = UpdaterConfig::default();
    match update(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Failed to build rates payload: {}", e);
            let fallback = RatesSnapshot::failure(e.to_string());
            if let Err(write_err) = fallback.write_to(&config.output_path) {
                error!("Could not write failure snapshot: {}", write_err);
            }
            ExitCode::FAILURE
        }
    }
}

/// One full run: fetch with fallback, normalize, overwrite the snapshot.
async fn update(config: &UpdaterConfig) -> Result<(), RatesError> {
    let fetcher = RatesFetcher::new(config);
    let (document, source) = fetcher.fetch().await?;
    let snapshot = normalize::build_snapshot(&document, &source)?;
    snapshot.write_to(&config.output_path)?;
    info!("Rates written to {}", config.output_path.display());
    Ok(())
}
