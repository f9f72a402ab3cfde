use std::collections::HashMap;
use std::time::Duration;
use tracing::warn;

use crate::exchange::MarketDataSource;
use crate::models::MarketState;

/// Per-run memo of market lookups, keyed by ticker. Failed lookups are
/// cached as `None` and never retried.
pub struct MarketResolver {
    cache: HashMap<String, Option<MarketState>>,
    delay: Duration,
}

impl MarketResolver {
    pub fn new(delay: Duration) -> Self {
        Self {
            cache: HashMap::new(),
            delay,
        }
    }

    pub async fn resolve(
        &mut self,
        source: &mut dyn MarketDataSource,
        ticker: &str,
    ) -> Option<&MarketState> {
        if !self.cache.contains_key(ticker) {
            let state = match source.get_market(ticker).await {
                Ok(market) => {
                    // Politeness gap between lookups.
                    if !self.delay.is_zero() {
                        tokio::time::sleep(self.delay).await;
                    }
                    Some(market)
                }
                Err(e) => {
                    warn!("  Warning: {}: {}", ticker, e);
                    None
                }
            };
            self.cache.insert(ticker.to_string(), state);
        }
        self.cache.get(ticker).and_then(|s| s.as_ref())
    }

    /// Distinct tickers looked up so far.
    pub fn markets_seen(&self) -> usize {
        self.cache.len()
    }

    pub fn failed(&self) -> usize {
        self.cache.values().filter(|s| s.is_none()).count()
    }
}
