//! Error types for the market sheet tracker
//!
//! The taxonomy encodes the failure policy directly: `ConfigError` and
//! `AuthError` are fatal at startup, everything wrapped by [`TickError`]
//! is logged at the tick boundary and the loop continues.

use thiserror::Error;

/// Errors raised while building the startup configuration. Fatal: the
/// process exits with status 1.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is absent or empty
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// `CREDENTIALS` is not a valid service-account key JSON
    #[error("Invalid CREDENTIALS format: {0}")]
    InvalidCredentials(#[source] serde_json::Error),

    /// `UPDATE_INTERVAL` is not a positive integer number of seconds
    #[error("Invalid UPDATE_INTERVAL '{0}': expected seconds as an integer")]
    InvalidInterval(String),
}

/// Errors raised while acquiring the spreadsheet handle. Fatal: the
/// process exits with status 1 — a bad key or revoked service account is
/// operator-correctable, not transient.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The service-account authenticator could not be built
    #[error("Failed to build service-account authenticator: {0}")]
    Authenticator(#[source] std::io::Error),

    /// Token endpoint rejected the service account
    #[error("Failed to obtain access token: {0}")]
    Token(String),

    /// The spreadsheet could not be opened with the given key
    #[error("Failed to open spreadsheet '{key}': {message}")]
    SpreadsheetAccess { key: String, message: String },

    /// Network failure while talking to the Google API
    #[error("Network error during authentication: {0}")]
    Network(#[from] reqwest::Error),
}

/// Errors raised while fetching the market listing. Transient: the tick
/// is skipped and the loop retries on the next interval.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network request failed
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The provider reported an error (non-200 status)
    #[error("Provider API error: {0}")]
    Api(String),

    /// Response body did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Provider rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,
}

/// Errors raised while clearing or writing the sheet. Transient: the
/// tick is skipped; the next successful tick overwrites whatever partial
/// state was left behind.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Network request failed
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The Sheets API rejected the request
    #[error("Sheets API error: {0}")]
    Api(String),

    /// Access token could not be refreshed mid-run
    #[error("Failed to refresh access token: {0}")]
    Token(String),
}

/// The listing came back with zero entries, so there is nothing to
/// average or rank. Replaces the division by zero a naive mean would hit.
#[derive(Debug, Error)]
#[error("cannot analyze an empty market listing")]
pub struct EmptyListingError;

/// Union of everything that can go wrong inside one tick. Caught at the
/// tick boundary; never aborts the loop.
#[derive(Debug, Error)]
pub enum TickError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    EmptyListing(#[from] EmptyListingError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
