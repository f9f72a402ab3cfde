use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::config::Config;
use crate::core::timestamp::UNKNOWN_MONTH;
use crate::models::{Category, OutcomeStatus, Trade};
use crate::stats::bucket::{sort_newest_first, Bucket, CategoryBucket, MonthBucket, Summary, Tally};

pub const DEFAULT_RECENT_DAYS: i64 = 7;
pub const DEFAULT_RECENT_LIMIT: usize = 20;

/// Everything the dashboard renders from one run.
#[derive(Debug, Clone, Serialize)]
pub struct Statistics {
    pub summary: Summary,
    pub recent_7_days: Bucket,
    pub open_trades: Vec<Trade>,
    pub by_sport: Vec<CategoryBucket>,
    pub by_month: Vec<MonthBucket>,
    pub all_trades: Vec<Trade>,
}

pub struct Aggregator {
    pub recent_days: i64,
    pub recent_limit: usize,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(DEFAULT_RECENT_DAYS, DEFAULT_RECENT_LIMIT)
    }
}

impl Aggregator {
    pub fn new(recent_days: i64, recent_limit: usize) -> Self {
        Self {
            recent_days,
            recent_limit,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.recent_days, cfg.recent_limit)
    }

    pub fn aggregate(&self, trades: &[Trade], now: DateTime<Utc>) -> Statistics {
        let mut all_trades = trades.to_vec();
        sort_newest_first(&mut all_trades);

        let open_trades = all_trades
            .iter()
            .filter(|t| t.outcome_status == OutcomeStatus::Open)
            .cloned()
            .collect();

        Statistics {
            summary: Summary::from_tally(&Tally::of(trades)),
            recent_7_days: self.recent(trades, now),
            open_trades,
            by_sport: by_category(trades),
            by_month: by_month(trades),
            all_trades,
        }
    }

    /// Trades dated within the trailing window ending at `now`, inclusive.
    fn recent(&self, trades: &[Trade], now: DateTime<Utc>) -> Bucket {
        let cutoff = now - Duration::days(self.recent_days);
        let recent: Vec<Trade> = trades
            .iter()
            .filter(|t| {
                t.trade_date
                    .map(|d| d.with_timezone(&Utc) >= cutoff)
                    .unwrap_or(false)
            })
            .cloned()
            .collect();
        Bucket::new(recent).truncate_list(self.recent_limit)
    }
}

/// Aggregate with the default 7-day / 20-trade recency window.
pub fn aggregate(trades: &[Trade], now: DateTime<Utc>) -> Statistics {
    Aggregator::default().aggregate(trades, now)
}

/// One bucket per category present, most profitable first. Ties keep the
/// order in which categories were first seen.
fn by_category(trades: &[Trade]) -> Vec<CategoryBucket> {
    let mut groups: Vec<(Category, Vec<Trade>)> = Vec::new();
    for t in trades {
        match groups.iter_mut().find(|(c, _)| *c == t.sport) {
            Some((_, members)) => members.push(t.clone()),
            None => groups.push((t.sport, vec![t.clone()])),
        }
    }

    let mut ranked: Vec<(f64, Category, Vec<Trade>)> = groups
        .into_iter()
        .map(|(c, members)| (Tally::of(&members).profit, c, members))
        .collect();
    ranked.sort_by(|a, b| b.0.total_cmp(&a.0));

    ranked
        .into_iter()
        .map(|(_, sport, members)| CategoryBucket {
            sport,
            bucket: Bucket::new(members),
        })
        .collect()
}

/// One bucket per calendar month, oldest first. Undated trades are left out.
fn by_month(trades: &[Trade]) -> Vec<MonthBucket> {
    let mut groups: BTreeMap<String, Vec<Trade>> = BTreeMap::new();
    for t in trades.iter().filter(|t| t.month_sort != UNKNOWN_MONTH) {
        groups.entry(t.month_sort.clone()).or_default().push(t.clone());
    }

    groups
        .into_iter()
        .map(|(month_sort, members)| MonthBucket {
            month: members[0].month.clone(),
            month_sort,
            bucket: Bucket::new(members),
        })
        .collect()
}
