//! Constants for the market sheet tracker
//!
//! Everything that is not operator-facing configuration lives here as a
//! compile-time constant. Operator-facing settings (API key, spreadsheet
//! key, credentials, update interval) come from the environment instead;
//! see the `config` module.

/// CoinMarketCap API base URL
pub const CMC_API_URL: &str = "https://pro-api.coinmarketcap.com";

/// CoinMarketCap endpoint for ranked listings
pub const CMC_LISTINGS_ENDPOINT: &str = "/v1/cryptocurrency/listings/latest";

/// Header carrying the CoinMarketCap API key
pub const CMC_API_KEY_HEADER: &str = "X-CMC_PRO_API_KEY";

/// How many ranked entries to fetch per cycle
pub const LISTING_PAGE_SIZE: u32 = 50;

/// Quote currency for all monetary fields
pub const QUOTE_CURRENCY: &str = "USD";

/// Google Sheets API base URL
pub const SHEETS_API_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// OAuth scope required to read and write spreadsheet values
pub const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";

/// Target tab; the whole tab is cleared and rewritten each tick
pub const SHEET_RANGE: &str = "Sheet1";

/// HTTP request timeout for both collaborators (in seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// User agent for HTTP requests
pub const USER_AGENT: &str = "market-sheet-tracker/0.1.0";

/// Seconds between ticks when `UPDATE_INTERVAL` is not set
pub const DEFAULT_UPDATE_INTERVAL_SECS: u64 = 300;

/// How many entries the "Top 5 by market cap" summary keeps
pub const TOP_BY_MARKET_CAP_COUNT: usize = 5;

/// Timestamp format for the "Last Updated" cell
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
