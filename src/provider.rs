//! Provider abstraction for fetching the ranked market listing

use async_trait::async_trait;

use crate::error::FetchError;
use crate::types::Listing;

/// Trait for market data providers
///
/// Implementations fetch one ranked snapshot of market entries per call.
/// The page size and quote currency are fixed by the implementation, not
/// chosen per call.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetches the current ranked listing.
    ///
    /// # Returns
    /// The listing in provider order, or a [`FetchError`] if the request
    /// or the response handling fails.
    async fn fetch_listing(&self) -> Result<Listing, FetchError>;

    /// Returns the name of this provider
    fn provider_name(&self) -> &'static str;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    use crate::types::MarketEntry;

    /// Mock provider for testing
    ///
    /// Returns a preset listing or error and counts how often it was
    /// called.
    pub struct MockProvider {
        response: Mutex<Result<Vec<MarketEntry>, FetchError>>,
        call_count: Mutex<usize>,
    }

    impl MockProvider {
        pub fn with_listing(listing: Vec<MarketEntry>) -> Self {
            Self {
                response: Mutex::new(Ok(listing)),
                call_count: Mutex::new(0),
            }
        }

        pub fn with_error(error: FetchError) -> Self {
            Self {
                response: Mutex::new(Err(error)),
                call_count: Mutex::new(0),
            }
        }

        pub fn call_count(&self) -> usize {
            *self.call_count.lock().unwrap()
        }
    }

    #[async_trait]
    impl MarketDataProvider for MockProvider {
        async fn fetch_listing(&self) -> Result<Listing, FetchError> {
            *self.call_count.lock().unwrap() += 1;
            match &*self.response.lock().unwrap() {
                Ok(listing) => Ok(listing.clone()),
                // FetchError does not implement Clone; reconstruct the
                // interesting variants for assertions.
                Err(FetchError::Api(msg)) => Err(FetchError::Api(msg.clone())),
                Err(FetchError::InvalidResponse(msg)) => {
                    Err(FetchError::InvalidResponse(msg.clone()))
                }
                Err(FetchError::RateLimited) => Err(FetchError::RateLimited),
                Err(FetchError::Network(_)) => {
                    Err(FetchError::Api("network error (mock)".to_string()))
                }
            }
        }

        fn provider_name(&self) -> &'static str {
            "mock"
        }
    }
}
