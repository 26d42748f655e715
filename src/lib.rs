//! # Market Sheet Tracker
//!
//! Polls the CoinMarketCap listings endpoint on a fixed interval,
//! derives summary statistics over the top 50 assets, and overwrites a
//! single Google Sheets tab with the raw listing and the summary.
//!
//! ## Architecture
//!
//! ```text
//! Tracker::run()  (one tick per interval)
//!     ↓
//! MarketDataProvider (CoinMarketCap)
//!     ↓
//! analyze()  (pure: top 5 by cap, mean price, change extremes)
//!     ↓
//! render()  (clear + append rows)
//!     ↓
//! SheetWriter (Google Sheets)
//! ```
//!
//! One sequential task; nothing persists across ticks. A tick failure is
//! logged and the loop continues, so the only fatal paths are startup
//! configuration and spreadsheet authentication.
//!
//! ## Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use market_sheet_tracker::{
//!     Config, CoinMarketCapProvider, GoogleSheetsWriter, Tracker,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let provider = Arc::new(CoinMarketCapProvider::new(config.api_key.clone())?);
//! let sheet =
//!     GoogleSheetsWriter::authenticate(config.credentials.clone(), &config.spreadsheet_key)
//!         .await?;
//!
//! let mut tracker = Tracker::new(provider, Box::new(sheet), config.update_interval);
//! tracker.run().await;
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod config;
pub mod constants;
pub mod error;
pub mod provider;
pub mod providers;
pub mod render;
pub mod sheet;
pub mod sheets;
pub mod tracker;
pub mod types;

// Re-export commonly used types
pub use analyzer::analyze;
pub use config::Config;
pub use error::{AuthError, ConfigError, EmptyListingError, FetchError, RenderError, TickError};
pub use provider::MarketDataProvider;
pub use providers::CoinMarketCapProvider;
pub use sheet::SheetWriter;
pub use sheets::GoogleSheetsWriter;
pub use tracker::Tracker;
pub use types::{Listing, MarketEntry, Row, Summary};
