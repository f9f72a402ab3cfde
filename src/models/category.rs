use serde::{Deserialize, Serialize};
use std::fmt;

/// Dashboard category a market ticker is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Parlays")]
    Parlays,
    #[serde(rename = "Prop Bets")]
    PropBets,
    #[serde(rename = "NHL")]
    Nhl,
    #[serde(rename = "NFL")]
    Nfl,
    #[serde(rename = "NBA")]
    Nba,
    #[serde(rename = "MLB")]
    Mlb,
    #[serde(rename = "College Football")]
    CollegeFootball,
    #[serde(rename = "College Basketball")]
    CollegeBasketball,
    #[serde(rename = "Soccer")]
    Soccer,
    #[serde(rename = "UFC/MMA")]
    UfcMma,
    #[serde(rename = "Golf")]
    Golf,
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    pub const ALL: [Category; 12] = [
        Category::Parlays,
        Category::PropBets,
        Category::Nhl,
        Category::Nfl,
        Category::Nba,
        Category::Mlb,
        Category::CollegeFootball,
        Category::CollegeBasketball,
        Category::Soccer,
        Category::UfcMma,
        Category::Golf,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Parlays => "Parlays",
            Category::PropBets => "Prop Bets",
            Category::Nhl => "NHL",
            Category::Nfl => "NFL",
            Category::Nba => "NBA",
            Category::Mlb => "MLB",
            Category::CollegeFootball => "College Football",
            Category::CollegeBasketball => "College Basketball",
            Category::Soccer => "Soccer",
            Category::UfcMma => "UFC/MMA",
            Category::Golf => "Golf",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
