//! Factor registry for discovering available factors.
//!
//! This module provides descriptive metadata for every entry in
//! [`FACTOR_TABLE`](crate::FACTOR_TABLE), used by the CLI listing and by
//! configuration error messages.

use serde::Serialize;

use crate::Factor;

/// Metadata about a factor.
#[derive(Debug, Clone, Serialize)]
pub struct FactorInfo {
    /// Factor identifier
    pub factor: Factor,

    /// Human-readable description
    pub description: &'static str,

    /// Raw [`StockMetrics`](smartbeta_traits::StockMetrics) fields consumed
    pub inputs: &'static [&'static str],

    /// Normalization formula, for display
    pub formula: &'static str,
}

/// Get information about all available factors, in table order.
#[must_use]
pub fn available_factors() -> Vec<FactorInfo> {
    vec![
        FactorInfo {
            factor: Factor::Quality,
            description: "Profitability measured by return on equity",
            inputs: &["roe"],
            formula: "clamp((roe - 5) * 5)",
        },
        FactorInfo {
            factor: Factor::Value,
            description: "Cheapness on earnings and book multiples",
            inputs: &["pe_ratio", "pb_ratio"],
            formula: "mean(clamp((30 - pe) * 4), clamp((5 - pb) * 20))",
        },
        FactorInfo {
            factor: Factor::Momentum,
            description: "Trailing price momentum",
            inputs: &["momentum"],
            formula: "clamp((momentum + 20) * 1.67)",
        },
        FactorInfo {
            factor: Factor::Growth,
            description: "Revenue growth",
            inputs: &["revenue_growth"],
            formula: "clamp((revenue_growth + 10) * 2.5)",
        },
        FactorInfo {
            factor: Factor::LowVolatility,
            description: "Stability measured by inverse realized volatility",
            inputs: &["volatility"],
            formula: "clamp((30 - volatility) * 4)",
        },
    ]
}

/// Get information about a specific factor by identifier.
#[must_use]
pub fn get_factor_info(name: &str) -> Option<FactorInfo> {
    let factor = name.parse::<Factor>().ok()?;
    available_factors()
        .into_iter()
        .find(|info| info.factor == factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_table() {
        let factors: Vec<_> = available_factors().iter().map(|i| i.factor).collect();
        assert_eq!(factors, Factor::ALL.to_vec());
    }

    #[test]
    fn test_get_factor_info() {
        let info = get_factor_info("value").unwrap();
        assert_eq!(info.factor, Factor::Value);
        assert_eq!(info.inputs, &["pe_ratio", "pb_ratio"]);

        assert!(get_factor_info("low_volatility").is_some());
        assert!(get_factor_info("dividend_yield").is_none());
    }

    #[test]
    fn test_descriptions_present() {
        for info in available_factors() {
            assert!(!info.description.is_empty());
            assert!(!info.inputs.is_empty());
        }
    }
}
