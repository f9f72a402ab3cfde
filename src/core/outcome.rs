use crate::models::{MarketState, Outcome, Trade};

/// Resolve a trade against its market's latest state.
///
/// `None` means the lookup failed or never happened. Resolved markets pay
/// $1 per contract when the market result matches the trade's side.
pub fn calc_outcome(trade: &Trade, market: Option<&MarketState>) -> Outcome {
    let Some(market) = market else {
        return Outcome::unknown();
    };

    if market.status.is_trading() {
        return Outcome::open();
    }

    if market.status.is_resolved() {
        let result = market
            .result
            .as_deref()
            .unwrap_or("")
            .trim()
            .to_ascii_lowercase();
        return if result == trade.side.as_str() {
            Outcome::won(trade.count as f64, trade.cost)
        } else {
            Outcome::lost(trade.cost)
        };
    }

    Outcome::unknown()
}
