use chrono::{DateTime, Utc};
use std::time::Duration;
use tracing::info;

use crate::config::Config;
use crate::core::outcome::calc_outcome;
use crate::error::Result;
use crate::exchange::MarketDataSource;
use crate::models::Trade;
use crate::stats::{Aggregator, Statistics};
use crate::tracker::fetcher::fetch_all_fills;
use crate::tracker::MarketResolver;

const PROGRESS_EVERY: usize = 20;

/// Drives runs: fetch fills, resolve outcomes, aggregate. Market states are
/// cached for one run only.
pub struct TradeTracker {
    page_size: usize,
    lookup_delay: Duration,
    aggregator: Aggregator,
}

impl TradeTracker {
    pub fn new(cfg: &Config) -> Self {
        Self {
            page_size: cfg.page_size.max(1),
            lookup_delay: Duration::from_millis(cfg.lookup_delay_ms),
            aggregator: Aggregator::from_config(cfg),
        }
    }

    /// Fetch every fill and resolve its outcome against the (memoized)
    /// state of its market. Trades come back in fetch order.
    pub async fn collect_trades(&self, source: &mut dyn MarketDataSource) -> Result<Vec<Trade>> {
        let fills = fetch_all_fills(source, self.page_size).await?;
        let total = fills.len();
        let mut resolver = MarketResolver::new(self.lookup_delay);

        info!("Fetching outcomes...");
        let mut trades = Vec::with_capacity(total);
        for (i, fill) in fills.into_iter().enumerate() {
            if (i + 1) % PROGRESS_EVERY == 0 {
                info!("  {}/{}", i + 1, total);
            }
            let trade = Trade::from_fill(fill);
            let market = resolver.resolve(source, &trade.ticker).await;
            let outcome = calc_outcome(&trade, market);
            trades.push(trade.with_outcome(outcome));
        }

        info!(
            "Resolved {} markets ({} lookups failed)",
            resolver.markets_seen(),
            resolver.failed()
        );
        Ok(trades)
    }

    pub async fn run(
        &self,
        source: &mut dyn MarketDataSource,
        now: DateTime<Utc>,
    ) -> Result<Statistics> {
        let trades = self.collect_trades(source).await?;
        Ok(self.aggregator.aggregate(&trades, now))
    }
}
