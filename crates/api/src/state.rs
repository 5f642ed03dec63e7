use std::sync::Arc;

use chrono::NaiveDate;
use rand::rngs::StdRng;
use stocksim_core::config::MissPolicy;
use stocksim_core::domain::{Lookup, StockRef};
use stocksim_core::reference::ReferenceTable;
use stocksim_core::seed::{SeedScope, Stream};
use stocksim_core::time::MarketClock;

use crate::error::ApiError;

#[derive(Debug, Clone)]
pub struct AppState {
    pub reference: Arc<ReferenceTable>,
    pub miss_policy: MissPolicy,
    pub pinned_as_of: Option<NaiveDate>,
}

impl AppState {
    pub fn new(
        reference: ReferenceTable,
        miss_policy: MissPolicy,
        pinned_as_of: Option<NaiveDate>,
    ) -> Self {
        Self {
            reference: Arc::new(reference),
            miss_policy,
            pinned_as_of,
        }
    }

    pub fn clock(&self) -> MarketClock {
        MarketClock::current(self.pinned_as_of)
    }

    /// Request-local rng, stable for the same stream, key and trading day.
    pub fn rng(&self, clock: &MarketClock, stream: Stream, key: &str) -> StdRng {
        SeedScope::new(clock.as_of).rng(stream, key)
    }

    /// Applies the miss policy to a symbol lookup.
    pub fn resolve(&self, symbol: &str) -> Result<&StockRef, ApiError> {
        match self.reference.lookup(symbol) {
            Lookup::Found(stock) => Ok(stock),
            Lookup::NotFound => {
                tracing::info!(%symbol, policy = self.miss_policy.as_str(), "unknown symbol");
                match self.miss_policy {
                    MissPolicy::NotFound => Err(ApiError::NotFound),
                    MissPolicy::IndexFallback => Ok(self.reference.index_fallback()),
                }
            }
        }
    }
}
