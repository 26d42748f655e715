//! Types shared between the fetcher, analyzer and presenter

use serde_json::Value;

/// One asset's market snapshot, as returned by the listings endpoint.
///
/// All monetary fields are quoted in USD. An entry is immutable once
/// fetched: it is owned by a single analysis cycle and discarded after
/// rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketEntry {
    /// Full asset name, e.g. "Bitcoin"
    pub name: String,

    /// Ticker symbol, e.g. "BTC"
    pub symbol: String,

    /// Current price in USD
    pub price: f64,

    /// Market capitalization in USD
    pub market_cap: f64,

    /// Trading volume over the last 24 hours, in USD
    pub volume_24h: f64,

    /// Signed price change over the last 24 hours, in percent
    pub percent_change_24h: f64,
}

/// One fetched snapshot of ranked market entries, in provider order.
///
/// The provider makes no ordering guarantee; the analyzer imposes order
/// where it needs one.
pub type Listing = Vec<MarketEntry>;

/// One spreadsheet row. String cells carry formatted values, number
/// cells carry raw numeric values (the percent-change columns).
pub type Row = Vec<Value>;

/// Summary statistics derived from one [`Listing`].
///
/// Recomputed from scratch every cycle; nothing here persists across
/// ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Up to five entries with the largest market cap, descending.
    /// Shorter than five when the listing itself is shorter.
    pub top_by_market_cap: Vec<MarketEntry>,

    /// Arithmetic mean of `price` over the whole listing
    pub average_price: f64,

    /// Entry with the largest `percent_change_24h`; ties resolve to the
    /// earliest entry in listing order
    pub highest_change: MarketEntry,

    /// Entry with the smallest `percent_change_24h`; ties resolve to the
    /// earliest entry in listing order
    pub lowest_change: MarketEntry,
}

#[cfg(test)]
impl MarketEntry {
    /// Shorthand constructor for tests
    pub fn sample(name: &str, symbol: &str, price: f64, market_cap: f64) -> Self {
        Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
            price,
            market_cap,
            volume_24h: 0.0,
            percent_change_24h: 0.0,
        }
    }
}
