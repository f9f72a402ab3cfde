use anyhow::{Context, Result};
use chrono::Utc;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use kalshi_trade_tracker::config::Config;
use kalshi_trade_tracker::exchange::{KalshiClient, MarketDataSource, ReplaySource};
use kalshi_trade_tracker::tracker::{Snapshot, TradeTracker};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cfg = Config::from_env();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    let mut source: Box<dyn MarketDataSource> = match &cfg.replay_file {
        Some(path) => Box::new(
            ReplaySource::from_file(path)
                .with_context(|| format!("Failed to load replay file {}", path.display()))?,
        ),
        None => {
            let creds = cfg.credentials()?;
            info!("Connecting to Kalshi API...");
            Box::new(KalshiClient::new(&cfg.base_url, &creds)?)
        }
    };

    let now = Utc::now();
    let tracker = TradeTracker::new(&cfg);
    let stats = tracker.run(source.as_mut(), now).await?;

    stats.print_summary(cfg.recent_days);

    let snapshot = Snapshot::new(stats, now, cfg.display_tz);
    snapshot
        .write(&cfg.output_path)
        .with_context(|| format!("Failed to write snapshot to {}", cfg.output_path.display()))?;
    println!("\nSnapshot saved to: {}", cfg.output_path.display());

    Ok(())
}
