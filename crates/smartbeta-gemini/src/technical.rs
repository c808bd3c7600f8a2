//! Technical indicator snapshots and the risk-profile shortlist.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use smartbeta_traits::RiskProfile;

/// Shortlist length used when the caller has no preference.
pub const DEFAULT_SHORTLIST: usize = 5;

/// Index constituents used when no constituent list is available.
pub const FALLBACK_TICKERS: [&str; 10] = [
    "ATRL", "DGKC", "EFERT", "EPCL", "FABL", "HBL", "MCB", "UBL", "LUCK", "ENGRO",
];

/// Aggregate technical recommendation for a ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TechnicalRating {
    /// Strong buy.
    StrongBuy,
    /// Buy.
    Buy,
    /// Neutral.
    Neutral,
    /// Sell.
    Sell,
    /// Strong sell.
    StrongSell,
}

impl TechnicalRating {
    /// Feed label, e.g. `STRONG_BUY`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::StrongBuy => "STRONG_BUY",
            Self::Buy => "BUY",
            Self::Neutral => "NEUTRAL",
            Self::Sell => "SELL",
            Self::StrongSell => "STRONG_SELL",
        }
    }
}

impl fmt::Display for TechnicalRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Daily technical indicators for one ticker.
///
/// Indicators the feed could not provide are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalSnapshot {
    /// Ticker, e.g. `LUCK.KAR`.
    pub ticker: String,
    /// Last close.
    #[serde(default)]
    pub price: Option<f64>,
    /// Aggregate recommendation.
    #[serde(default)]
    pub rating: Option<TechnicalRating>,
    /// Relative strength index.
    #[serde(default)]
    pub rsi: Option<f64>,
    /// MACD line.
    #[serde(default)]
    pub macd: Option<f64>,
    /// MACD signal line.
    #[serde(default)]
    pub macd_signal: Option<f64>,
    /// Average directional index.
    #[serde(default)]
    pub adx: Option<f64>,
    /// Traded volume.
    #[serde(default)]
    pub volume: Option<f64>,
}

impl TechnicalSnapshot {
    /// A snapshot with only a ticker; every indicator missing.
    #[must_use]
    pub fn unavailable(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            price: None,
            rating: None,
            rsi: None,
            macd: None,
            macd_signal: None,
            adx: None,
            volume: None,
        }
    }
}

/// Ratings acceptable to a risk profile.
#[must_use]
pub const fn allowed_ratings(profile: RiskProfile) -> &'static [TechnicalRating] {
    use TechnicalRating::{Buy, Neutral, Sell, StrongBuy};
    match profile {
        RiskProfile::Conservative => &[StrongBuy, Buy],
        RiskProfile::Moderate => &[StrongBuy, Buy, Neutral],
        RiskProfile::Aggressive => &[StrongBuy, Buy, Neutral, Sell],
    }
}

/// The top `n` snapshots whose rating suits `profile`, strongest RSI first
/// and MACD breaking ties.
///
/// Snapshots without a rating are dropped. Missing or non-finite indicators
/// sort after present ones; input order is kept among equals.
#[must_use]
pub fn shortlist(
    snapshots: &[TechnicalSnapshot],
    profile: RiskProfile,
    n: usize,
) -> Vec<TechnicalSnapshot> {
    let allowed = allowed_ratings(profile);
    let mut eligible: Vec<&TechnicalSnapshot> = snapshots
        .iter()
        .filter(|s| s.rating.is_some_and(|r| allowed.contains(&r)))
        .collect();

    eligible.sort_by(|a, b| {
        descending_present_first(a.rsi, b.rsi).then(descending_present_first(a.macd, b.macd))
    });

    eligible.into_iter().take(n).cloned().collect()
}

fn descending_present_first(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a.filter(|v| v.is_finite()), b.filter(|v| v.is_finite())) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
