pub mod kalshi;
pub mod replay;
pub mod wire;

pub use kalshi::KalshiClient;
pub use replay::ReplaySource;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Fill, MarketState};

/// One page of the fill listing.
#[derive(Debug, Clone, Default)]
pub struct FillPage {
    pub fills: Vec<Fill>,
    /// Fills on the page that could not be decoded and were dropped.
    pub skipped: usize,
    /// Continuation cursor; `None` on the last page.
    pub cursor: Option<String>,
}

impl FillPage {
    /// The page carried nothing at all, decoded or not.
    pub fn is_exhausted(&self) -> bool {
        self.fills.is_empty() && self.skipped == 0
    }
}

#[async_trait]
pub trait MarketDataSource: Send + Sync {
    async fn list_fills(&mut self, cursor: Option<&str>, limit: usize) -> Result<FillPage>;
    async fn get_market(&mut self, ticker: &str) -> Result<MarketState>;
}
