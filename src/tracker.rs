//! Cycle controller: the fetch → analyze → render loop
//!
//! Two states only. `Authenticating` covers startup: a tracker can only
//! be constructed around an already-acquired sheet handle, and a failed
//! acquisition exits the process instead of constructing one. `Running`
//! is terminal: once entered, no tick failure aborts the loop.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::time::sleep;

use crate::analyzer::analyze;
use crate::error::TickError;
use crate::provider::MarketDataProvider;
use crate::render::render;
use crate::sheet::SheetWriter;

/// Controller states. The only transition is `Authenticating → Running`,
/// taken when [`Tracker::run`] starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Authenticating,
    Running,
}

/// Drives the periodic fetch → analyze → render cycle.
pub struct Tracker {
    provider: Arc<dyn MarketDataProvider>,
    sheet: Box<dyn SheetWriter>,
    interval: Duration,
    state: State,
}

impl Tracker {
    /// Creates a tracker around an authenticated sheet handle.
    pub fn new(
        provider: Arc<dyn MarketDataProvider>,
        sheet: Box<dyn SheetWriter>,
        interval: Duration,
    ) -> Self {
        Self {
            provider,
            sheet,
            interval,
            state: State::Authenticating,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Runs the tick loop forever.
    ///
    /// Every tick error is caught here, logged, and followed by the same
    /// fixed sleep as a successful tick. The sleep is not compensated for
    /// the tick's own duration, so the cycle period is interval plus tick
    /// time. The loop never exits; the process stops only when killed.
    pub async fn run(&mut self) {
        self.state = State::Running;
        tracing::info!(
            provider = self.provider.provider_name(),
            interval_secs = self.interval.as_secs(),
            "Tracker running"
        );

        loop {
            let start = Instant::now();
            match self.tick().await {
                Ok(count) => {
                    tracing::info!(
                        entries = count,
                        latency_ms = start.elapsed().as_millis() as u64,
                        "Tick completed"
                    );
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Tick failed, retrying next interval");
                }
            }

            sleep(self.interval).await;
        }
    }

    /// Runs one fetch → analyze → render cycle.
    ///
    /// # Returns
    /// The number of entries written, or the first error encountered. A
    /// fetch failure or an empty listing skips analysis and rendering
    /// entirely, leaving the sheet untouched.
    pub async fn tick(&self) -> Result<usize, TickError> {
        let listing = self.provider.fetch_listing().await?;
        let summary = analyze(&listing)?;
        render(self.sheet.as_ref(), &listing, &summary).await?;
        Ok(listing.len())
    }
}
