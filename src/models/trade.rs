use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use crate::core::classifier::categorize;
use crate::core::timestamp::{month_key, month_label, parse_timestamp};
use crate::models::{Category, Fill, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Open,
    Won,
    Lost,
    Unknown,
}

impl fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutcomeStatus::Open => write!(f, "open"),
            OutcomeStatus::Won => write!(f, "won"),
            OutcomeStatus::Lost => write!(f, "lost"),
            OutcomeStatus::Unknown => write!(f, "unknown"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub status: OutcomeStatus,
    pub payout: f64,
    pub profit: f64,
}

impl Outcome {
    pub fn unknown() -> Self {
        Self {
            status: OutcomeStatus::Unknown,
            payout: 0.0,
            profit: 0.0,
        }
    }

    pub fn open() -> Self {
        Self {
            status: OutcomeStatus::Open,
            payout: 0.0,
            profit: 0.0,
        }
    }

    pub fn won(payout: f64, cost: f64) -> Self {
        Self {
            status: OutcomeStatus::Won,
            payout,
            profit: payout - cost,
        }
    }

    pub fn lost(cost: f64) -> Self {
        Self {
            status: OutcomeStatus::Lost,
            payout: 0.0,
            profit: -cost,
        }
    }
}

/// A fill annotated with its category, parsed date and realized outcome.
///
/// Field names are the dashboard's JSON contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trade {
    pub ticker: String,
    pub side: Side,
    pub count: u64,
    pub price_dollars: f64,
    pub cost: f64,
    pub created_time: String,
    #[serde(serialize_with = "serialize_trade_date")]
    pub trade_date: Option<DateTime<FixedOffset>>,
    pub sport: Category,
    pub outcome_status: OutcomeStatus,
    pub payout: f64,
    pub profit: f64,
    pub month: String,
    pub month_sort: String,
}

impl Trade {
    /// Classify and date a fill. The outcome starts as unknown until
    /// `with_outcome` is applied.
    pub fn from_fill(fill: Fill) -> Self {
        let trade_date = parse_timestamp(fill.created_time.as_deref());
        let cost = fill.cost();
        Trade {
            sport: categorize(&fill.ticker),
            side: fill.side,
            count: fill.count,
            price_dollars: fill.price,
            cost,
            created_time: fill.created_time.unwrap_or_default(),
            month: month_label(trade_date.as_ref()),
            month_sort: month_key(trade_date.as_ref()),
            trade_date,
            ticker: fill.ticker,
            outcome_status: OutcomeStatus::Unknown,
            payout: 0.0,
            profit: 0.0,
        }
    }

    pub fn with_outcome(self, outcome: Outcome) -> Self {
        Trade {
            outcome_status: outcome.status,
            payout: outcome.payout,
            profit: outcome.profit,
            ..self
        }
    }

    pub fn outcome(&self) -> Outcome {
        Outcome {
            status: self.outcome_status,
            payout: self.payout,
            profit: self.profit,
        }
    }
}

/// ISO-8601 with an explicit `±HH:MM` offset, never `Z`.
fn serialize_trade_date<S: Serializer>(
    date: &Option<DateTime<FixedOffset>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match date {
        Some(dt) => serializer.serialize_some(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, false)),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::timestamp::UNKNOWN_MONTH;

    fn fill(ticker: &str, created: Option<&str>) -> Fill {
        Fill {
            ticker: ticker.to_string(),
            side: Side::No,
            count: 5,
            price: 0.3,
            created_time: created.map(|s| s.to_string()),
        }
    }

    #[test]
    fn from_fill_annotates() {
        let t = Trade::from_fill(fill("KXNBAGAME-25JAN15LALBOS", Some("2025-01-15T20:00:00Z")));
        assert_eq!(t.sport, Category::Nba);
        assert!((t.cost - 1.5).abs() < 1e-9);
        assert_eq!(t.month, "Jan 2025");
        assert_eq!(t.month_sort, "2025-01");
        assert_eq!(t.outcome_status, OutcomeStatus::Unknown);
    }

    #[test]
    fn undated_fill_gets_unknown_month() {
        let t = Trade::from_fill(fill("KXNHLGAME", Some("not a date")));
        assert!(t.trade_date.is_none());
        assert_eq!(t.created_time, "not a date");
        assert_eq!(t.month, UNKNOWN_MONTH);
        assert_eq!(t.month_sort, UNKNOWN_MONTH);
    }

    #[test]
    fn with_outcome_sets_money_fields() {
        let t = Trade::from_fill(fill("KXNHLGAME", None)).with_outcome(Outcome::lost(1.5));
        assert_eq!(t.outcome_status, OutcomeStatus::Lost);
        assert_eq!(t.payout, 0.0);
        assert!((t.profit + 1.5).abs() < 1e-9);
        assert_eq!(t.outcome(), Outcome::lost(1.5));
    }

    #[test]
    fn serializes_dashboard_fields() {
        let t = Trade::from_fill(fill("KXNFLGAME", Some("2025-06-09T12:00:00Z")));
        let v = serde_json::to_value(&t).unwrap();
        assert_eq!(v["side"], "no");
        assert_eq!(v["sport"], "NFL");
        assert_eq!(v["outcome_status"], "unknown");
        assert_eq!(v["trade_date"], "2025-06-09T12:00:00+00:00");
        assert_eq!(v["month_sort"], "2025-06");
    }

    #[test]
    fn trade_date_keeps_offset_and_fraction() {
        let t = Trade::from_fill(fill("KXNFLGAME", Some("2025-02-11T10:00:00.250-05:00")));
        let v = serde_json::to_value(&t).unwrap();
        assert_eq!(v["trade_date"], "2025-02-11T10:00:00.250-05:00");

        let t = Trade::from_fill(fill("KXNFLGAME", Some("2025-06-09 12:00:00")));
        let v = serde_json::to_value(&t).unwrap();
        assert_eq!(v["trade_date"], "2025-06-09T12:00:00+00:00");

        let t = Trade::from_fill(fill("KXNFLGAME", None));
        let v = serde_json::to_value(&t).unwrap();
        assert!(v["trade_date"].is_null());
    }
}
