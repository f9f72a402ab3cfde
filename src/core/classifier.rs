use crate::models::Category;

/// Keyword rules in precedence order. The first rule with any keyword
/// contained in the upper-cased ticker wins.
const RULES: &[(Category, &[&str])] = &[
    (
        Category::Parlays,
        &["PARLAY", "BUNDLE", "MULTIGAME", "MULTI", "COMBO"],
    ),
    (
        Category::PropBets,
        &[
            "GOAL", "POINT", "ASSIST", "REBOUND", "TOUCHDOWN", "YARD", "RECEPTION", "RUSH", "PASS",
            "HIT", "RBI", "STRIKEOUT", "SAVE", "SHOT", "PLAYER",
        ],
    ),
    (Category::Nhl, &["NHL"]),
    (Category::Nfl, &["NFL"]),
    (Category::Nba, &["NBA"]),
    (Category::Mlb, &["MLB"]),
    (Category::CollegeFootball, &["NCAAF", "CFB"]),
    (Category::CollegeBasketball, &["NCAAB", "CBB"]),
    (Category::Soccer, &["SOCCER", "EPL"]),
    (Category::UfcMma, &["UFC", "MMA"]),
    (Category::Golf, &["PGA", "GOLF"]),
];

/// Map a market ticker to its dashboard category.
pub fn categorize(ticker: &str) -> Category {
    let t = ticker.to_uppercase();
    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| t.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other)
}
