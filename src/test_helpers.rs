use chrono::{DateTime, Utc};

use crate::models::{Fill, Outcome, Side, Trade};

/// Build an annotated trade with an unknown outcome.
pub fn make_trade(
    ticker: &str,
    side: Side,
    count: u64,
    price: f64,
    created: Option<&str>,
) -> Trade {
    Trade::from_fill(Fill {
        ticker: ticker.to_string(),
        side,
        count,
        price,
        created_time: created.map(|s| s.to_string()),
    })
}

pub fn won(ticker: &str, count: u64, price: f64, created: Option<&str>) -> Trade {
    let t = make_trade(ticker, Side::Yes, count, price, created);
    let outcome = Outcome::won(count as f64, t.cost);
    t.with_outcome(outcome)
}

pub fn lost(ticker: &str, count: u64, price: f64, created: Option<&str>) -> Trade {
    let t = make_trade(ticker, Side::No, count, price, created);
    let outcome = Outcome::lost(t.cost);
    t.with_outcome(outcome)
}

pub fn open(ticker: &str, count: u64, price: f64, created: Option<&str>) -> Trade {
    make_trade(ticker, Side::Yes, count, price, created).with_outcome(Outcome::open())
}

pub fn utc(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .unwrap()
        .with_timezone(&Utc)
}
