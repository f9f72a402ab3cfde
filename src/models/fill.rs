use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Position taken in a binary market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Yes,
    No,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Yes => "yes",
            Side::No => "no",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" => Ok(Side::Yes),
            "no" => Ok(Side::No),
            other => Err(format!("unrecognised side '{}'", other)),
        }
    }
}

/// One order execution as decoded from a fill listing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    pub ticker: String,
    pub side: Side,
    pub count: u64,
    /// Dollars paid per contract.
    pub price: f64,
    #[serde(default)]
    pub created_time: Option<String>,
}

impl Fill {
    pub fn cost(&self) -> f64 {
        self.count as f64 * self.price
    }
}
