use std::process;
use std::sync::Arc;

use tracing::{error, info};

use market_sheet_tracker::{Config, CoinMarketCapProvider, GoogleSheetsWriter, Tracker};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "Configuration error");
            process::exit(1);
        }
    };

    let provider = match CoinMarketCapProvider::new(config.api_key.clone()) {
        Ok(p) => Arc::new(p),
        Err(e) => {
            error!(error = %e, "Failed to build HTTP client");
            process::exit(1);
        }
    };

    // Authentication is operator-correctable, not transient: fail hard
    // instead of retrying.
    let sheet = match GoogleSheetsWriter::authenticate(
        config.credentials.clone(),
        &config.spreadsheet_key,
    )
    .await
    {
        Ok(sheet) => sheet,
        Err(e) => {
            error!(error = %e, "Failed to authenticate Google Sheets");
            process::exit(1);
        }
    };

    info!(
        interval_secs = config.update_interval.as_secs(),
        "Starting market sheet tracker"
    );

    let mut tracker = Tracker::new(provider, Box::new(sheet), config.update_interval);
    tracker.run().await;
}
