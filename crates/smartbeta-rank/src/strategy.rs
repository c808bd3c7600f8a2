//! Named factor-combination rule.

use serde::{Deserialize, Serialize};
use smartbeta_factors::Factor;
use smartbeta_traits::{Result, RiskProfile, SmartBetaError};

/// A smart beta strategy: an equal-weighted blend of factors tagged with the
/// risk profile it suits.
///
/// `expected_return` and `expected_volatility` are descriptive only and are
/// never used in scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    /// Unique name within a catalog.
    pub name: String,

    /// Human-readable description.
    pub description: String,

    /// Risk profile this strategy is offered to.
    pub risk_profile: RiskProfile,

    /// Factors to average. Duplicates are counted once.
    pub factors: Vec<Factor>,

    /// Expected annualized return, percent.
    pub expected_return: f64,

    /// Expected annualized volatility, percent.
    pub expected_volatility: f64,
}

impl Strategy {
    /// Create a strategy.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        risk_profile: RiskProfile,
        factors: impl Into<Vec<Factor>>,
        expected_return: f64,
        expected_volatility: f64,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            risk_profile,
            factors: factors.into(),
            expected_return,
            expected_volatility,
        }
    }

    /// Factors in declaration order with duplicates removed.
    #[must_use]
    pub fn distinct_factors(&self) -> Vec<Factor> {
        let mut seen = [false; Factor::COUNT];
        self.factors
            .iter()
            .copied()
            .filter(|f| !std::mem::replace(&mut seen[f.index()], true))
            .collect()
    }

    /// Check that the strategy can be scored.
    ///
    /// # Errors
    ///
    /// Returns [`SmartBetaError::InvalidArgument`] for an empty name, an
    /// empty factor set, or non-finite descriptive figures.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(SmartBetaError::invalid("strategy name must not be empty"));
        }
        if self.factors.is_empty() {
            return Err(SmartBetaError::invalid(format!(
                "strategy '{}' has no factors",
                self.name
            )));
        }
        if !self.expected_return.is_finite() || !self.expected_volatility.is_finite() {
            return Err(SmartBetaError::invalid(format!(
                "strategy '{}' has non-finite expected return or volatility",
                self.name
            )));
        }
        Ok(())
    }
}
