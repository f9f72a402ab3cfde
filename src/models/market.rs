use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MarketStatus {
    Open,
    Active,
    Closed,
    Settled,
    Finalized,
    Other(String),
}

impl MarketStatus {
    /// Case-insensitive; anything unrecognised (including "") lands in `Other`.
    pub fn parse(s: &str) -> MarketStatus {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" => MarketStatus::Open,
            "active" => MarketStatus::Active,
            "closed" => MarketStatus::Closed,
            "settled" => MarketStatus::Settled,
            "finalized" => MarketStatus::Finalized,
            other => MarketStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MarketStatus::Open => "open",
            MarketStatus::Active => "active",
            MarketStatus::Closed => "closed",
            MarketStatus::Settled => "settled",
            MarketStatus::Finalized => "finalized",
            MarketStatus::Other(s) => s,
        }
    }

    pub fn is_trading(&self) -> bool {
        matches!(self, MarketStatus::Open | MarketStatus::Active)
    }

    pub fn is_resolved(&self) -> bool {
        matches!(
            self,
            MarketStatus::Closed | MarketStatus::Settled | MarketStatus::Finalized
        )
    }
}

impl fmt::Display for MarketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for MarketStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MarketStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(MarketStatus::parse(s.as_deref().unwrap_or("")))
    }
}

/// Latest known state of one market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketState {
    #[serde(default = "unknown_status")]
    pub status: MarketStatus,
    #[serde(default)]
    pub result: Option<String>,
}

fn unknown_status() -> MarketStatus {
    MarketStatus::Other(String::new())
}

impl MarketState {
    pub fn new(status: &str, result: Option<&str>) -> Self {
        Self {
            status: MarketStatus::parse(status),
            result: result.map(|r| r.to_string()),
        }
    }
}
