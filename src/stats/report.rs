use std::fmt::{self, Write};

use crate::stats::Statistics;

const RULE: &str = "  ───────────────────────────────────";

impl Statistics {
    /// Print the console report. `recent_days` labels the recency section.
    pub fn print_summary(&self, recent_days: i64) {
        let mut out = String::new();
        if self.write_summary(&mut out, recent_days).is_ok() {
            print!("{}", out);
        }
    }

    pub fn write_summary(&self, out: &mut impl Write, recent_days: i64) -> fmt::Result {
        let s = &self.summary;
        let r = &self.recent_7_days;

        writeln!(out, "\n{}", "=".repeat(70))?;
        writeln!(out, "  KALSHI TRADE REPORT")?;
        writeln!(out, "{}", "=".repeat(70))?;
        writeln!(out)?;
        writeln!(out, "  OVERALL")?;
        writeln!(out, "{}", RULE)?;
        writeln!(out, "  Trades:      {}", s.total_trades)?;
        writeln!(out, "  Won/Lost:    {} / {}", s.won, s.lost)?;
        writeln!(out, "  Open:        {}", s.open)?;
        writeln!(out, "  Win Rate:    {:.1}%", s.win_rate)?;
        writeln!(out, "  Invested:    ${:.2}", s.total_invested)?;
        writeln!(out, "  Payout:      ${:.2}", s.total_payout)?;
        writeln!(out, "  Profit:      ${:+.2}", s.total_profit)?;
        writeln!(out, "  ROI:         {:+.1}%", s.roi)?;
        writeln!(out, "  Avg Bet:     ${:.2}", s.avg_bet)?;
        writeln!(out)?;
        writeln!(out, "  LAST {} DAYS", recent_days)?;
        writeln!(out, "{}", RULE)?;
        writeln!(out, "  Trades:      {} ({} open)", r.trades, r.open)?;
        writeln!(out, "  Won/Lost:    {} / {}", r.won, r.lost)?;
        writeln!(out, "  Win Rate:    {:.1}%", r.win_rate)?;
        writeln!(out, "  Profit:      ${:+.2}", r.profit)?;

        if !self.by_sport.is_empty() {
            writeln!(out)?;
            writeln!(out, "  BY SPORT")?;
            writeln!(out, "{}", RULE)?;
            for b in &self.by_sport {
                writeln!(
                    out,
                    "  {:>18}: {} trades | WR {:.0}% | PnL ${:+.2} | Avg ${:.2}",
                    b.sport.as_str(),
                    b.bucket.trades,
                    b.bucket.win_rate,
                    b.bucket.profit,
                    b.bucket.avg_bet
                )?;
            }
        }

        if !self.by_month.is_empty() {
            writeln!(out)?;
            writeln!(out, "  BY MONTH")?;
            writeln!(out, "{}", RULE)?;
            for m in &self.by_month {
                writeln!(
                    out,
                    "  {:>8}: {} trades | WR {:.0}% | Invested ${:.2} | PnL ${:+.2}",
                    m.month, m.bucket.trades, m.bucket.win_rate, m.bucket.invested, m.bucket.profit
                )?;
            }
        }

        writeln!(out, "{}", "=".repeat(70))
    }
}
