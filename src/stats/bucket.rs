use serde::Serialize;

use crate::models::{Category, OutcomeStatus, Trade};

/// Raw (unrounded) sums over a set of trades.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tally {
    pub trades: usize,
    pub won: usize,
    pub lost: usize,
    pub open: usize,
    pub invested: f64,
    pub payout: f64,
    pub profit: f64,
}

impl Tally {
    pub fn of<'a>(trades: impl IntoIterator<Item = &'a Trade>) -> Self {
        let mut tally = Tally::default();
        for t in trades {
            tally.trades += 1;
            tally.invested += t.cost;
            tally.payout += t.payout;
            tally.profit += t.profit;
            match t.outcome_status {
                OutcomeStatus::Won => tally.won += 1,
                OutcomeStatus::Lost => tally.lost += 1,
                OutcomeStatus::Open => tally.open += 1,
                OutcomeStatus::Unknown => {}
            }
        }
        tally
    }

    /// Percentage of decided trades that won; 0 when nothing is decided.
    pub fn win_rate(&self) -> f64 {
        let decided = self.won + self.lost;
        if decided > 0 {
            self.won as f64 / decided as f64 * 100.0
        } else {
            0.0
        }
    }

    pub fn avg_bet(&self) -> f64 {
        if self.trades > 0 {
            self.invested / self.trades as f64
        } else {
            0.0
        }
    }

    pub fn roi(&self) -> f64 {
        if self.invested > 0.0 {
            self.profit / self.invested * 100.0
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total_trades: usize,
    pub won: usize,
    pub lost: usize,
    pub open: usize,
    pub win_rate: f64,
    pub total_invested: f64,
    pub total_payout: f64,
    pub total_profit: f64,
    pub roi: f64,
    pub avg_bet: f64,
}

impl Summary {
    pub fn from_tally(t: &Tally) -> Self {
        Summary {
            total_trades: t.trades,
            won: t.won,
            lost: t.lost,
            open: t.open,
            win_rate: round1(t.win_rate()),
            total_invested: round2(t.invested),
            total_payout: round2(t.payout),
            total_profit: round2(t.profit),
            roi: round1(t.roi()),
            avg_bet: round2(t.avg_bet()),
        }
    }
}

/// Statistics over one group of trades. `trades_list` is newest first.
#[derive(Debug, Clone, Serialize)]
pub struct Bucket {
    pub trades: usize,
    pub won: usize,
    pub lost: usize,
    pub open: usize,
    pub win_rate: f64,
    pub invested: f64,
    pub profit: f64,
    pub avg_bet: f64,
    pub trades_list: Vec<Trade>,
}

impl Bucket {
    pub fn new(mut trades: Vec<Trade>) -> Self {
        let t = Tally::of(&trades);
        sort_newest_first(&mut trades);
        Bucket {
            trades: t.trades,
            won: t.won,
            lost: t.lost,
            open: t.open,
            win_rate: round1(t.win_rate()),
            invested: round2(t.invested),
            profit: round2(t.profit),
            avg_bet: round2(t.avg_bet()),
            trades_list: trades,
        }
    }

    /// Keep only the `n` most recent member trades; counts are unaffected.
    pub fn truncate_list(mut self, n: usize) -> Self {
        self.trades_list.truncate(n);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryBucket {
    pub sport: Category,
    #[serde(flatten)]
    pub bucket: Bucket,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthBucket {
    pub month: String,
    pub month_sort: String,
    #[serde(flatten)]
    pub bucket: Bucket,
}

/// Stable sort by trade date, newest first. Undated trades go last and keep
/// their fetch order.
pub fn sort_newest_first(trades: &mut [Trade]) {
    trades.sort_by(|a, b| b.trade_date.cmp(&a.trade_date));
}

pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
