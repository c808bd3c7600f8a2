//! Common types used throughout smartbeta.
//!
//! This module defines the per-stock metric record consumed by the factor
//! library, the investor risk profile, and a thin wrapper over a Polars
//! DataFrame used by universe providers.

use std::str::FromStr;

use derive_more::Display;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{Result, SmartBetaError};

// Re-export date type from chrono
pub use chrono::NaiveDate as Date;

/// A market symbol identifier, e.g. "HBL" or "STK001".
pub type Symbol = String;

/// Investor risk tolerance bucket.
///
/// Strategies are tagged with exactly one profile and ranking only
/// considers strategies whose tag matches the requested profile.
#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskProfile {
    /// Capital preservation first.
    #[display("conservative")]
    Conservative,
    /// Balanced growth and stability.
    #[display("moderate")]
    Moderate,
    /// Growth first, tolerates drawdowns.
    #[display("aggressive")]
    Aggressive,
}

impl RiskProfile {
    /// All profiles, from least to most risk tolerant.
    pub const ALL: [Self; 3] = [Self::Conservative, Self::Moderate, Self::Aggressive];

    /// Lowercase identifier used in configuration files.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Conservative => "conservative",
            Self::Moderate => "moderate",
            Self::Aggressive => "aggressive",
        }
    }
}

impl FromStr for RiskProfile {
    type Err = SmartBetaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "conservative" => Ok(Self::Conservative),
            "moderate" => Ok(Self::Moderate),
            "aggressive" => Ok(Self::Aggressive),
            other => Err(SmartBetaError::invalid(format!(
                "unknown risk profile '{other}' (expected conservative, moderate or aggressive)"
            ))),
        }
    }
}

/// One equity's raw fundamentals and technicals at a point in time.
///
/// Percent-valued fields are expressed in percent, not fractions
/// (an ROE of 18% is `18.0`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockMetrics {
    /// Unique ticker symbol.
    pub symbol: Symbol,
    /// Company name.
    pub name: String,
    /// Return on equity, percent.
    pub roe: f64,
    /// Price to earnings ratio.
    pub pe_ratio: f64,
    /// Price to book ratio.
    pub pb_ratio: f64,
    /// Revenue growth, percent.
    pub revenue_growth: f64,
    /// Price momentum, percent.
    pub momentum: f64,
    /// Realized volatility, percent.
    pub volatility: f64,
}

impl StockMetrics {
    /// Build a validated record.
    ///
    /// # Errors
    ///
    /// Returns [`SmartBetaError::InvalidArgument`] if the symbol is empty or
    /// any numeric field is NaN or infinite.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        symbol: impl Into<Symbol>,
        name: impl Into<String>,
        roe: f64,
        pe_ratio: f64,
        pb_ratio: f64,
        revenue_growth: f64,
        momentum: f64,
        volatility: f64,
    ) -> Result<Self> {
        let metrics = Self {
            symbol: symbol.into(),
            name: name.into(),
            roe,
            pe_ratio,
            pb_ratio,
            revenue_growth,
            momentum,
            volatility,
        };
        metrics.validate()?;
        Ok(metrics)
    }

    /// Named numeric fields, in declaration order.
    #[must_use]
    pub fn numeric_fields(&self) -> [(&'static str, f64); 6] {
        [
            ("roe", self.roe),
            ("pe_ratio", self.pe_ratio),
            ("pb_ratio", self.pb_ratio),
            ("revenue_growth", self.revenue_growth),
            ("momentum", self.momentum),
            ("volatility", self.volatility),
        ]
    }

    /// Check that the record is well formed.
    ///
    /// # Errors
    ///
    /// Returns [`SmartBetaError::InvalidArgument`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.symbol.trim().is_empty() {
            return Err(SmartBetaError::invalid("stock symbol must not be empty"));
        }
        for (field, value) in self.numeric_fields() {
            if !value.is_finite() {
                return Err(SmartBetaError::invalid(format!(
                    "stock '{}' has non-finite {field}: {value}",
                    self.symbol
                )));
            }
        }
        Ok(())
    }
}

/// Container for tabular market data.
///
/// Wraps a Polars DataFrame as produced by a universe provider (CSV file,
/// live feed adapter). Conversion to [`StockMetrics`] lives in
/// [`crate::universe`].
#[derive(Debug, Clone)]
pub struct MarketData {
    data: DataFrame,
}

impl MarketData {
    /// Creates a new `MarketData` instance from a DataFrame.
    pub const fn new(data: DataFrame) -> Self {
        Self { data }
    }

    /// Returns a reference to the underlying DataFrame.
    pub const fn data(&self) -> &DataFrame {
        &self.data
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.data.height()
    }

    /// Returns whether there are no rows.
    pub fn is_empty(&self) -> bool {
        self.data.height() == 0
    }

    /// Checks if a column exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.data
            .get_column_names()
            .iter()
            .any(|s| s.as_str() == name)
    }

    /// Gets a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.data.column(name).ok()
    }
}

impl From<DataFrame> for MarketData {
    fn from(data: DataFrame) -> Self {
        Self::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StockMetrics {
        StockMetrics::new("HBL", "Habib Bank", 18.0, 7.5, 1.1, 12.0, 8.0, 14.0).unwrap()
    }

    #[test]
    fn test_risk_profile_parse() {
        assert_eq!(
            "conservative".parse::<RiskProfile>().unwrap(),
            RiskProfile::Conservative
        );
        assert_eq!(" Moderate ".parse::<RiskProfile>().unwrap(), RiskProfile::Moderate);
        assert_eq!("AGGRESSIVE".parse::<RiskProfile>().unwrap(), RiskProfile::Aggressive);
        assert!(matches!(
            "reckless".parse::<RiskProfile>(),
            Err(SmartBetaError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_risk_profile_display_matches_serde() {
        for profile in RiskProfile::ALL {
            let json = serde_json::to_string(&profile).unwrap();
            assert_eq!(json, format!("\"{profile}\""));
            assert_eq!(profile.to_string(), profile.as_str());
        }
    }

    #[test]
    fn test_stock_metrics_valid() {
        let stock = sample();
        assert_eq!(stock.symbol, "HBL");
        assert!(stock.validate().is_ok());
    }

    #[test]
    fn test_stock_metrics_rejects_non_finite() {
        let result = StockMetrics::new("X", "X", f64::NAN, 10.0, 1.0, 0.0, 0.0, 10.0);
        assert!(matches!(result, Err(SmartBetaError::InvalidArgument(_))));

        let mut stock = sample();
        stock.volatility = f64::INFINITY;
        let err = stock.validate().unwrap_err();
        assert!(err.to_string().contains("volatility"));
    }

    #[test]
    fn test_stock_metrics_rejects_empty_symbol() {
        let result = StockMetrics::new("  ", "X", 10.0, 10.0, 1.0, 0.0, 0.0, 10.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_stock_metrics_missing_field_is_rejected() {
        let json = r#"{"symbol":"HBL","name":"Habib Bank","roe":18.0}"#;
        assert!(serde_json::from_str::<StockMetrics>(json).is_err());
    }

    #[test]
    fn test_market_data_columns() {
        let df = df! {
            "symbol" => &["HBL"],
            "roe" => &[18.0],
        }
        .unwrap();

        let market_data = MarketData::from(df);
        assert_eq!(market_data.len(), 1);
        assert!(market_data.has_column("roe"));
        assert!(!market_data.has_column("pe_ratio"));
        assert!(market_data.column("symbol").is_some());
    }
}
