//! Strategy catalog.
//!
//! The catalog is read-only once built. Its order is significant: when two
//! strategies tie on a stock, the one listed first wins.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use smartbeta_factors::Factor;
use smartbeta_traits::{Result, RiskProfile, SmartBetaError};
use tracing::debug;

use crate::Strategy;

/// An ordered, validated list of strategies with unique names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Strategy>", into = "Vec<Strategy>")]
pub struct StrategyCatalog {
    strategies: Vec<Strategy>,
}

impl StrategyCatalog {
    /// Build a catalog, validating every entry.
    ///
    /// # Errors
    ///
    /// Returns [`SmartBetaError::InvalidArgument`] for a malformed strategy
    /// or a duplicated name.
    pub fn new(strategies: Vec<Strategy>) -> Result<Self> {
        validate_strategies(&strategies)?;
        Ok(Self { strategies })
    }

    /// Parse a catalog from a JSON array of strategy objects.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, a field is missing, or the
    /// catalog fails validation.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let strategies: Vec<Strategy> = serde_json::from_str(json)?;
        let catalog = Self::new(strategies)?;
        debug!(strategies = catalog.len(), "loaded strategy catalog");
        Ok(catalog)
    }

    /// Read a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// All strategies in catalog order.
    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    /// Strategies offered to a risk profile, in catalog order.
    pub fn for_profile(&self, profile: RiskProfile) -> impl Iterator<Item = &Strategy> {
        self.strategies
            .iter()
            .filter(move |s| s.risk_profile == profile)
    }

    /// Look up a strategy by name.
    ///
    /// # Errors
    ///
    /// Returns [`SmartBetaError::StrategyNotFound`] if no strategy has that name.
    pub fn get(&self, name: &str) -> Result<&Strategy> {
        self.strategies
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| SmartBetaError::StrategyNotFound(name.to_string()))
    }

    /// Number of strategies.
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

/// The production catalog.
impl Default for StrategyCatalog {
    fn default() -> Self {
        use Factor::{Growth, LowVolatility, Momentum, Quality, Value};
        use RiskProfile::{Aggressive, Conservative, Moderate};

        Self {
            strategies: vec![
                Strategy::new(
                    "Quality",
                    "High-quality companies with strong fundamentals",
                    Conservative,
                    [Quality],
                    8.5,
                    12.0,
                ),
                Strategy::new(
                    "Value",
                    "Undervalued companies trading below intrinsic value",
                    Moderate,
                    [Value],
                    9.2,
                    15.5,
                ),
                Strategy::new(
                    "Momentum",
                    "Companies with strong price momentum",
                    Aggressive,
                    [Momentum],
                    11.0,
                    18.0,
                ),
                Strategy::new(
                    "Growth",
                    "Companies with high growth potential",
                    Aggressive,
                    [Growth],
                    12.5,
                    20.0,
                ),
                Strategy::new(
                    "Low Volatility",
                    "Stable companies with lower price volatility",
                    Conservative,
                    [LowVolatility],
                    7.8,
                    9.5,
                ),
                Strategy::new(
                    "Quality Value",
                    "High-quality companies at attractive valuations",
                    Moderate,
                    [Quality, Value],
                    9.8,
                    13.5,
                ),
                Strategy::new(
                    "Quality Momentum",
                    "High-quality companies with positive momentum",
                    Moderate,
                    [Quality, Momentum],
                    10.5,
                    14.8,
                ),
            ],
        }
    }
}

impl TryFrom<Vec<Strategy>> for StrategyCatalog {
    type Error = SmartBetaError;

    fn try_from(strategies: Vec<Strategy>) -> Result<Self> {
        Self::new(strategies)
    }
}

impl From<StrategyCatalog> for Vec<Strategy> {
    fn from(catalog: StrategyCatalog) -> Self {
        catalog.strategies
    }
}

impl AsRef<[Strategy]> for StrategyCatalog {
    fn as_ref(&self) -> &[Strategy] {
        &self.strategies
    }
}

/// Validate each strategy and reject duplicate names.
pub(crate) fn validate_strategies(strategies: &[Strategy]) -> Result<()> {
    let mut names = HashSet::with_capacity(strategies.len());
    for strategy in strategies {
        strategy.validate()?;
        if !names.insert(strategy.name.as_str()) {
            return Err(SmartBetaError::invalid(format!(
                "duplicate strategy name: {}",
                strategy.name
            )));
        }
    }
    Ok(())
}
