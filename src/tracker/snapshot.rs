use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::error::Result;
use crate::stats::Statistics;

/// The single JSON document the dashboard reads.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub generated_at: String,
    pub generated_at_display: String,
    #[serde(flatten)]
    pub stats: Statistics,
}

impl Snapshot {
    pub fn new(stats: Statistics, now: DateTime<Utc>, tz: Tz) -> Self {
        let local = now.with_timezone(&tz);
        Snapshot {
            generated_at: local.to_rfc3339(),
            generated_at_display: local.format("%B %d, %Y at %I:%M %p").to_string(),
            stats,
        }
    }

    /// Write pretty-printed JSON, replacing any previous snapshot in one rename.
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, json)?;
        if let Err(e) = std::fs::rename(&tmp, path) {
            std::fs::remove_file(&tmp).ok();
            return Err(e.into());
        }

        info!(
            "Wrote snapshot with {} trades to {}",
            self.stats.summary.total_trades,
            path.display()
        );
        Ok(())
    }
}
