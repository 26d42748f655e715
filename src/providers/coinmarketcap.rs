//! CoinMarketCap listings provider implementation

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::constants::{
    CMC_API_KEY_HEADER, CMC_API_URL, CMC_LISTINGS_ENDPOINT, LISTING_PAGE_SIZE, QUOTE_CURRENCY,
    REQUEST_TIMEOUT_SECS, USER_AGENT,
};
use crate::error::FetchError;
use crate::provider::MarketDataProvider;
use crate::types::{Listing, MarketEntry};

/// CoinMarketCap response envelope for the listings endpoint
#[derive(Debug, Deserialize)]
struct CmcResponse {
    status: CmcStatus,
    #[serde(default)]
    data: Vec<CmcEntry>,
}

#[derive(Debug, Deserialize)]
struct CmcStatus {
    error_code: i64,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CmcEntry {
    name: String,
    symbol: String,
    /// Quotes keyed by currency; only the requested convert currency is
    /// present in practice
    quote: HashMap<String, CmcQuote>,
}

#[derive(Debug, Deserialize)]
struct CmcQuote {
    price: f64,
    market_cap: f64,
    volume_24h: f64,
    percent_change_24h: f64,
}

/// CoinMarketCap market data provider
///
/// Fetches the top ranked entries (fixed page size, USD quotes) from the
/// `listings/latest` endpoint.
pub struct CoinMarketCapProvider {
    client: Client,
    api_key: String,
}

impl CoinMarketCapProvider {
    /// Creates a new CoinMarketCap provider with the given API key
    pub fn new(api_key: String) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchError::Network)?;

        Ok(Self { client, api_key })
    }

    /// Builds the listings URL with the fixed page size and quote currency
    fn build_url(&self) -> String {
        format!(
            "{}{}?start=1&limit={}&convert={}",
            CMC_API_URL, CMC_LISTINGS_ENDPOINT, LISTING_PAGE_SIZE, QUOTE_CURRENCY
        )
    }

    /// Converts the wire entries into [`MarketEntry`] values, in response
    /// order
    fn parse_entries(entries: Vec<CmcEntry>) -> Result<Listing, FetchError> {
        entries
            .into_iter()
            .map(|entry| {
                let quote = entry.quote.get(QUOTE_CURRENCY).ok_or_else(|| {
                    FetchError::InvalidResponse(format!(
                        "Entry '{}' is missing the {} quote",
                        entry.name, QUOTE_CURRENCY
                    ))
                })?;

                Ok(MarketEntry {
                    name: entry.name.clone(),
                    symbol: entry.symbol.clone(),
                    price: quote.price,
                    market_cap: quote.market_cap,
                    volume_24h: quote.volume_24h,
                    percent_change_24h: quote.percent_change_24h,
                })
            })
            .collect()
    }
}

#[async_trait]
impl MarketDataProvider for CoinMarketCapProvider {
    async fn fetch_listing(&self) -> Result<Listing, FetchError> {
        let url = self.build_url();
        tracing::debug!(url = %url, "Fetching listing from CoinMarketCap");

        let response = self
            .client
            .get(&url)
            .header(CMC_API_KEY_HEADER, &self.api_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(FetchError::Network)?;

        if response.status().as_u16() == 429 {
            return Err(FetchError::RateLimited);
        }

        let status = response.status();
        let body = response.text().await.map_err(FetchError::Network)?;

        // Error bodies still carry the envelope, so surface the provider's
        // own message when there is one.
        if !status.is_success() {
            let message = serde_json::from_str::<CmcResponse>(&body)
                .ok()
                .and_then(|r| r.status.error_message)
                .unwrap_or_else(|| format!("HTTP {}", status));
            return Err(FetchError::Api(message));
        }

        let parsed: CmcResponse = serde_json::from_str(&body).map_err(|e| {
            FetchError::InvalidResponse(format!("Failed to parse CoinMarketCap response: {}", e))
        })?;

        if parsed.status.error_code != 0 {
            return Err(FetchError::Api(
                parsed
                    .status
                    .error_message
                    .unwrap_or_else(|| format!("error code {}", parsed.status.error_code)),
            ));
        }

        let listing = Self::parse_entries(parsed.data)?;
        tracing::debug!(count = listing.len(), "Successfully fetched listing");

        Ok(listing)
    }

    fn provider_name(&self) -> &'static str {
        "coinmarketcap"
    }
}
