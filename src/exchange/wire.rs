//! JSON shapes of the Kalshi portfolio and market endpoints, and their
//! conversion into the crate's models.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::exchange::FillPage;
use crate::models::{Fill, MarketState, MarketStatus, Side};

#[derive(Debug, Clone, Deserialize)]
pub struct FillsResponse {
    #[serde(default)]
    pub fills: Vec<RawFill>,
    #[serde(default)]
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawFill {
    #[serde(default)]
    pub ticker: String,
    #[serde(default)]
    pub market_ticker: Option<String>,
    #[serde(default)]
    pub side: Option<String>,
    #[serde(default)]
    pub count: u64,
    /// Dollars per contract.
    #[serde(default)]
    pub price: Option<f64>,
    /// Cents per contract.
    #[serde(default)]
    pub yes_price: Option<i64>,
    #[serde(default)]
    pub no_price: Option<i64>,
    #[serde(default)]
    pub created_time: Option<String>,
}

impl RawFill {
    pub fn into_fill(self) -> Result<Fill, String> {
        let side = match self.side.as_deref().map(str::trim) {
            None | Some("") => Side::Yes,
            Some(s) => s.parse::<Side>()?,
        };

        let cents = match side {
            Side::Yes => self.yes_price,
            Side::No => self.no_price,
        };
        let price = self
            .price
            .or_else(|| cents.map(|c| c as f64 / 100.0))
            .unwrap_or(0.0);

        let ticker = if self.ticker.is_empty() {
            self.market_ticker.unwrap_or_default()
        } else {
            self.ticker
        };

        Ok(Fill {
            ticker,
            side,
            count: self.count,
            price,
            created_time: self.created_time,
        })
    }
}

/// Decode a page, dropping (and logging) fills that do not decode.
pub fn decode_page(raw: Vec<RawFill>, cursor: Option<String>) -> FillPage {
    let mut page = FillPage {
        fills: Vec::with_capacity(raw.len()),
        skipped: 0,
        cursor: cursor.filter(|c| !c.trim().is_empty()),
    };
    for r in raw {
        let ticker = r.ticker.clone();
        match r.into_fill() {
            Ok(fill) => page.fills.push(fill),
            Err(e) => {
                warn!("  Skipping fill on {}: {}", ticker, e);
                page.skipped += 1;
            }
        }
    }
    page
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarketResponse {
    pub market: RawMarket,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawMarket {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub result: Option<String>,
}

impl From<RawMarket> for MarketState {
    fn from(m: RawMarket) -> Self {
        MarketState {
            status: MarketStatus::parse(m.status.as_deref().unwrap_or("")),
            result: m.result.filter(|r| !r.trim().is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_kalshi_fills_page() {
        let body = r#"{
            "fills": [
                {"ticker": "KXNFLGAME-25SEP07KCBAL-KC", "side": "yes", "count": 10,
                 "yes_price": 60, "no_price": 40, "created_time": "2025-09-07T17:01:02.123Z"},
                {"ticker": "KXNBAGAME-25JAN15", "side": "NO", "count": 5, "price": 0.3},
                {"market_ticker": "KXNHLGAME-X", "count": 2, "no_price": 45},
                {"ticker": "KXBAD", "side": "sideways", "count": 1}
            ],
            "cursor": "abc123"
        }"#;
        let resp: FillsResponse = serde_json::from_str(body).unwrap();
        let page = decode_page(resp.fills, resp.cursor);

        assert_eq!(page.fills.len(), 3);
        assert_eq!(page.skipped, 1);
        assert_eq!(page.cursor.as_deref(), Some("abc123"));

        assert_eq!(page.fills[0].side, Side::Yes);
        assert!((page.fills[0].price - 0.6).abs() < 1e-9);
        assert_eq!(page.fills[1].side, Side::No);
        assert!((page.fills[1].price - 0.3).abs() < 1e-9);

        // Missing side defaults to yes, so the yes price (absent) is used.
        assert_eq!(page.fills[2].ticker, "KXNHLGAME-X");
        assert_eq!(page.fills[2].side, Side::Yes);
        assert_eq!(page.fills[2].price, 0.0);
        assert!(page.fills[2].created_time.is_none());
    }

    #[test]
    fn empty_cursor_means_last_page() {
        let page = decode_page(Vec::new(), Some(String::new()));
        assert!(page.cursor.is_none());
        assert!(page.is_exhausted());
    }

    #[test]
    fn market_response_to_state() {
        let resp: MarketResponse =
            serde_json::from_str(r#"{"market": {"ticker": "X", "status": "finalized", "result": "no"}}"#)
                .unwrap();
        let state = MarketState::from(resp.market);
        assert_eq!(state.status, MarketStatus::Finalized);
        assert_eq!(state.result.as_deref(), Some("no"));

        let resp: MarketResponse =
            serde_json::from_str(r#"{"market": {"status": "active", "result": ""}}"#).unwrap();
        let state = MarketState::from(resp.market);
        assert_eq!(state.status, MarketStatus::Active);
        assert!(state.result.is_none());
    }
}
