//! Low-volatility factor.
//!
//! Realized volatility of 30% or more scores 0; 5% or less scores 100.

use smartbeta_traits::StockMetrics;

use crate::clamp_score;

/// Volatility (percent) at or above which the score is zero.
pub const VOLATILITY_CEILING: f64 = 30.0;

/// Score points per percentage point of volatility below the ceiling.
pub const VOLATILITY_SLOPE: f64 = 4.0;

/// Low-volatility score in `[0, 100]`.
#[must_use]
pub fn low_volatility_score(stock: &StockMetrics) -> f64 {
    clamp_score((VOLATILITY_CEILING - stock.volatility) * VOLATILITY_SLOPE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn with_volatility(volatility: f64) -> StockMetrics {
        StockMetrics::new("T", "T", 15.0, 15.0, 2.0, 5.0, 5.0, volatility).unwrap()
    }

    #[test]
    fn test_low_volatility_mapping() {
        assert_relative_eq!(low_volatility_score(&with_volatility(30.0)), 0.0);
        assert_relative_eq!(low_volatility_score(&with_volatility(7.5)), 90.0);
        assert_relative_eq!(low_volatility_score(&with_volatility(20.0)), 40.0);
        assert_relative_eq!(low_volatility_score(&with_volatility(5.0)), 100.0);
        assert_relative_eq!(low_volatility_score(&with_volatility(45.0)), 0.0);
    }
}
