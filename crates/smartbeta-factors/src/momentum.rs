//! Momentum factor.
//!
//! Trailing price momentum of -20% scores 0; roughly +40% scores 100.

use smartbeta_traits::StockMetrics;

use crate::clamp_score;

/// Momentum (percent) offset added before scaling.
pub const MOMENTUM_OFFSET: f64 = 20.0;

/// Score points per percentage point of momentum.
pub const MOMENTUM_SLOPE: f64 = 1.67;

/// Momentum score in `[0, 100]`.
#[must_use]
pub fn momentum_score(stock: &StockMetrics) -> f64 {
    clamp_score((stock.momentum + MOMENTUM_OFFSET) * MOMENTUM_SLOPE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn with_momentum(momentum: f64) -> StockMetrics {
        StockMetrics::new("T", "T", 15.0, 15.0, 2.0, 5.0, momentum, 15.0).unwrap()
    }

    #[test]
    fn test_momentum_mapping() {
        assert_relative_eq!(momentum_score(&with_momentum(-20.0)), 0.0);
        assert_relative_eq!(momentum_score(&with_momentum(0.0)), 33.4, epsilon = 1e-9);
        assert_relative_eq!(momentum_score(&with_momentum(10.0)), 50.1, epsilon = 1e-9);
    }

    #[test]
    fn test_momentum_clamps() {
        // 60 * 1.67 = 100.2 before clamping
        assert_relative_eq!(momentum_score(&with_momentum(40.0)), 100.0);
        assert_relative_eq!(momentum_score(&with_momentum(-55.0)), 0.0);
    }
}
