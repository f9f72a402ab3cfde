use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};

use kalshi_trade_tracker::error::{Result, TrackerError};
use kalshi_trade_tracker::exchange::{FillPage, MarketDataSource};
use kalshi_trade_tracker::models::{Fill, MarketState, Side};

/// A mock source with numeric cursors, configurable failing tickers and
/// call counters.
pub struct MockSource {
    pub fills: Vec<Fill>,
    pub markets: HashMap<String, MarketState>,
    pub failing: HashSet<String>,
    pub page_requests: usize,
    pub market_requests: Vec<String>,
}

impl MockSource {
    pub fn new(fills: Vec<Fill>) -> Self {
        Self {
            fills,
            markets: HashMap::new(),
            failing: HashSet::new(),
            page_requests: 0,
            market_requests: Vec::new(),
        }
    }

    pub fn with_market(mut self, ticker: &str, status: &str, result: Option<&str>) -> Self {
        self.markets
            .insert(ticker.to_string(), MarketState::new(status, result));
        self
    }

    pub fn failing_on(mut self, ticker: &str) -> Self {
        self.failing.insert(ticker.to_string());
        self
    }
}

#[async_trait]
impl MarketDataSource for MockSource {
    async fn list_fills(&mut self, cursor: Option<&str>, limit: usize) -> Result<FillPage> {
        self.page_requests += 1;
        let start: usize = cursor.and_then(|c| c.parse().ok()).unwrap_or(0);
        let end = (start + limit).min(self.fills.len());
        Ok(FillPage {
            fills: self.fills[start.min(end)..end].to_vec(),
            skipped: 0,
            cursor: (end < self.fills.len()).then(|| end.to_string()),
        })
    }

    async fn get_market(&mut self, ticker: &str) -> Result<MarketState> {
        self.market_requests.push(ticker.to_string());
        if self.failing.contains(ticker) {
            return Err(TrackerError::Api {
                status: 503,
                body: "service unavailable".to_string(),
            });
        }
        self.markets
            .get(ticker)
            .cloned()
            .ok_or_else(|| TrackerError::Api {
                status: 404,
                body: format!("market {} not found", ticker),
            })
    }
}

pub fn fill(ticker: &str, side: Side, count: u64, price: f64, created: Option<&str>) -> Fill {
    Fill {
        ticker: ticker.to_string(),
        side,
        count,
        price,
        created_time: created.map(|s| s.to_string()),
    }
}

pub fn utc(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .unwrap()
        .with_timezone(&Utc)
}
