//! Closed set of factor identifiers and their scoring table.

use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use smartbeta_traits::{SmartBetaError, StockMetrics};

use crate::{
    growth::growth_score, low_volatility::low_volatility_score, momentum::momentum_score,
    quality::quality_score, value::value_score,
};

/// Scoring function for one factor.
pub type FactorFn = fn(&StockMetrics) -> f64;

/// A single dimension of stock attractiveness.
///
/// Serialized in camelCase (`"lowVolatility"`); `"low_volatility"` is
/// accepted on input.
#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Factor {
    /// Profitability (return on equity).
    #[display("quality")]
    Quality,
    /// Cheapness (P/E and P/B).
    #[display("value")]
    Value,
    /// Trailing price momentum.
    #[display("momentum")]
    Momentum,
    /// Revenue growth.
    #[display("growth")]
    Growth,
    /// Inverse realized volatility.
    #[display("lowVolatility")]
    #[serde(alias = "low_volatility")]
    LowVolatility,
}

/// Factor dispatch table, indexed by [`Factor::index`].
///
/// Adding a factor means adding a variant and a row here.
pub const FACTOR_TABLE: [(Factor, FactorFn); Factor::COUNT] = [
    (Factor::Quality, quality_score),
    (Factor::Value, value_score),
    (Factor::Momentum, momentum_score),
    (Factor::Growth, growth_score),
    (Factor::LowVolatility, low_volatility_score),
];

impl Factor {
    /// Number of factors.
    pub const COUNT: usize = 5;

    /// All factors in table order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Quality,
        Self::Value,
        Self::Momentum,
        Self::Growth,
        Self::LowVolatility,
    ];

    /// Position of this factor in [`FACTOR_TABLE`] and [`Factor::ALL`].
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Quality => 0,
            Self::Value => 1,
            Self::Momentum => 2,
            Self::Growth => 3,
            Self::LowVolatility => 4,
        }
    }

    /// Identifier used in configuration files.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Quality => "quality",
            Self::Value => "value",
            Self::Momentum => "momentum",
            Self::Growth => "growth",
            Self::LowVolatility => "lowVolatility",
        }
    }

    /// Scoring function for this factor.
    #[must_use]
    pub const fn scorer(&self) -> FactorFn {
        FACTOR_TABLE[self.index()].1
    }

    /// Score one stock on this factor, in `[0, 100]`.
    #[must_use]
    pub fn score(&self, stock: &StockMetrics) -> f64 {
        (self.scorer())(stock)
    }
}

impl FromStr for Factor {
    type Err = SmartBetaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "quality" => Ok(Self::Quality),
            "value" => Ok(Self::Value),
            "momentum" => Ok(Self::Momentum),
            "growth" => Ok(Self::Growth),
            "lowVolatility" | "low_volatility" => Ok(Self::LowVolatility),
            other => Err(SmartBetaError::invalid(format!("unknown factor '{other}'"))),
        }
    }
}

/// Every factor score for one stock, each computed exactly once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorScores([f64; Factor::COUNT]);

impl FactorScores {
    /// Evaluate the full factor table against a stock.
    #[must_use]
    pub fn compute(stock: &StockMetrics) -> Self {
        let mut scores = [0.0; Factor::COUNT];
        for (factor, scorer) in FACTOR_TABLE {
            scores[factor.index()] = scorer(stock);
        }
        Self(scores)
    }

    /// Score for a single factor.
    #[must_use]
    pub const fn get(&self, factor: Factor) -> f64 {
        self.0[factor.index()]
    }

    /// Scores in [`Factor::ALL`] order.
    #[must_use]
    pub const fn as_array(&self) -> &[f64; Factor::COUNT] {
        &self.0
    }
}
