//! Pure analysis transform over one fetched listing

use crate::constants::TOP_BY_MARKET_CAP_COUNT;
use crate::error::EmptyListingError;
use crate::types::{MarketEntry, Summary};

/// Computes the per-cycle [`Summary`] from a listing.
///
/// Pure function of its input: no clock, no I/O, no shared state. The
/// top-by-market-cap ranking uses a stable sort so equal caps keep their
/// listing order, and the change extremes resolve ties to the earliest
/// entry. A listing shorter than five entries yields a shorter ranking,
/// not an error; only an empty listing fails.
pub fn analyze(listing: &[MarketEntry]) -> Result<Summary, EmptyListingError> {
    if listing.is_empty() {
        return Err(EmptyListingError);
    }

    let mut ranked: Vec<MarketEntry> = listing.to_vec();
    ranked.sort_by(|a, b| b.market_cap.total_cmp(&a.market_cap));
    ranked.truncate(TOP_BY_MARKET_CAP_COUNT);

    let total_price: f64 = listing.iter().map(|entry| entry.price).sum();
    let average_price = total_price / listing.len() as f64;

    let mut highest_change = &listing[0];
    let mut lowest_change = &listing[0];
    for entry in &listing[1..] {
        if entry.percent_change_24h > highest_change.percent_change_24h {
            highest_change = entry;
        }
        if entry.percent_change_24h < lowest_change.percent_change_24h {
            lowest_change = entry;
        }
    }

    Ok(Summary {
        top_by_market_cap: ranked,
        average_price,
        highest_change: highest_change.clone(),
        lowest_change: lowest_change.clone(),
    })
}
