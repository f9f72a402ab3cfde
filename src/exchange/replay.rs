use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

use crate::error::{Result, TrackerError};
use crate::exchange::wire::{decode_page, RawFill, RawMarket};
use crate::exchange::{FillPage, MarketDataSource};
use crate::models::{Fill, MarketState};

/// Fixture layout: the raw fill objects as the fills endpoint returns them,
/// plus a ticker → market map.
#[derive(Debug, Default, Deserialize)]
struct ReplayFixture {
    #[serde(default)]
    fills: Vec<RawFill>,
    #[serde(default)]
    markets: HashMap<String, RawMarket>,
}

/// A MarketDataSource that serves pre-loaded fills and market states.
/// Cursors are stringified offsets into the fill list.
pub struct ReplaySource {
    fills: Vec<Fill>,
    markets: HashMap<String, MarketState>,
    market_requests: usize,
}

impl ReplaySource {
    pub fn new(fills: Vec<Fill>, markets: HashMap<String, MarketState>) -> Self {
        Self {
            fills,
            markets,
            market_requests: 0,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let fixture: ReplayFixture = serde_json::from_str(json)?;
        let page = decode_page(fixture.fills, None);
        let markets = fixture
            .markets
            .into_iter()
            .map(|(ticker, m)| (ticker, MarketState::from(m)))
            .collect();
        Ok(Self::new(page.fills, markets))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let source = Self::from_json(&content)?;
        info!(
            "Loaded {} fills and {} markets from {}",
            source.fills.len(),
            source.markets.len(),
            path.display()
        );
        Ok(source)
    }

    /// Number of `get_market` calls served so far, hits or misses.
    pub fn market_requests(&self) -> usize {
        self.market_requests
    }
}

#[async_trait]
impl MarketDataSource for ReplaySource {
    async fn list_fills(&mut self, cursor: Option<&str>, limit: usize) -> Result<FillPage> {
        let start = match cursor {
            Some(c) => c
                .parse::<usize>()
                .map_err(|_| TrackerError::Replay(format!("bad cursor '{}'", c)))?,
            None => 0,
        }
        .min(self.fills.len());
        let end = (start + limit.max(1)).min(self.fills.len());

        Ok(FillPage {
            fills: self.fills[start..end].to_vec(),
            skipped: 0,
            cursor: (end < self.fills.len()).then(|| end.to_string()),
        })
    }

    async fn get_market(&mut self, ticker: &str) -> Result<MarketState> {
        self.market_requests += 1;
        self.markets
            .get(ticker)
            .cloned()
            .ok_or_else(|| TrackerError::Replay(format!("no market for {}", ticker)))
    }
}
