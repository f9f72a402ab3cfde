use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Result, TrackerError};

pub const KALSHI_API_PROD: &str = "https://api.elections.kalshi.com/trade-api/v2";

/// API key id and PEM private key used to sign Kalshi requests.
#[derive(Clone)]
pub struct Credentials {
    pub api_key_id: String,
    pub private_key_pem: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key_id", &redact(&self.api_key_id))
            .field("private_key_pem", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Kalshi
    pub api_key_id: String,
    #[serde(skip_serializing)]
    pub private_key: String,
    pub base_url: String,

    // Fetching
    pub page_size: usize,
    pub lookup_delay_ms: u64,

    // Recency window
    pub recent_days: i64,
    pub recent_limit: usize,

    // Output
    pub output_path: PathBuf,
    pub display_tz: Tz,

    // Offline replay fixture, used instead of the live API when set
    pub replay_file: Option<PathBuf>,

    // Logging
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key_id: String::new(),
            private_key: String::new(),
            base_url: KALSHI_API_PROD.to_string(),
            page_size: 100,
            lookup_delay_ms: 50,
            recent_days: 7,
            recent_limit: 20,
            output_path: PathBuf::from("data/trades.json"),
            display_tz: chrono_tz::America::New_York,
            replay_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env = |key: &str, default: &str| -> String {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };

        let defaults = Config::default();

        Config {
            api_key_id: env("KALSHI_API_KEY_ID", "").trim().to_string(),
            private_key: env("KALSHI_PRIVATE_KEY", "").replace("\\n", "\n"),
            base_url: env("KALSHI_BASE_URL", KALSHI_API_PROD),
            page_size: env("PAGE_SIZE", "100").parse().unwrap_or(defaults.page_size),
            lookup_delay_ms: env("LOOKUP_DELAY_MS", "50")
                .parse()
                .unwrap_or(defaults.lookup_delay_ms),
            recent_days: env("RECENT_DAYS", "7").parse().unwrap_or(defaults.recent_days),
            recent_limit: env("RECENT_LIMIT", "20")
                .parse()
                .unwrap_or(defaults.recent_limit),
            output_path: PathBuf::from(env("OUTPUT_PATH", "data/trades.json")),
            display_tz: env("DISPLAY_TZ", "America/New_York")
                .parse()
                .unwrap_or(defaults.display_tz),
            replay_file: std::env::var("REPLAY_FILE")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            log_level: env("LOG_LEVEL", "info"),
        }
    }

    /// Both credential values are required before any authenticated fetch.
    pub fn credentials(&self) -> Result<Credentials> {
        if self.api_key_id.trim().is_empty() || self.private_key.trim().is_empty() {
            return Err(TrackerError::Config(
                "missing credentials: set KALSHI_API_KEY_ID and KALSHI_PRIVATE_KEY".to_string(),
            ));
        }
        Ok(Credentials {
            api_key_id: self.api_key_id.clone(),
            private_key_pem: self.private_key.clone(),
        })
    }
}

/// Show only the last 4 characters of a secret identifier.
pub fn redact(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() > 4 {
        let suffix: String = chars[chars.len() - 4..].iter().collect();
        format!("...{}", suffix)
    } else {
        "...".to_string()
    }
}
