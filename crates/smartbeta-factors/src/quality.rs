//! Quality factor.
//!
//! Profitability measured by return on equity. An ROE of 5% scores 0 and
//! an ROE of 25% or more scores 100.

use smartbeta_traits::StockMetrics;

use crate::clamp_score;

/// ROE (percent) that maps to a score of zero.
pub const ROE_FLOOR: f64 = 5.0;

/// Score points per percentage point of ROE above the floor.
pub const ROE_SLOPE: f64 = 5.0;

/// Quality score in `[0, 100]`.
#[must_use]
pub fn quality_score(stock: &StockMetrics) -> f64 {
    clamp_score((stock.roe - ROE_FLOOR) * ROE_SLOPE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn with_roe(roe: f64) -> StockMetrics {
        StockMetrics::new("T", "T", roe, 15.0, 2.0, 5.0, 5.0, 15.0).unwrap()
    }

    #[test]
    fn test_quality_anchors() {
        assert_relative_eq!(quality_score(&with_roe(5.0)), 0.0);
        assert_relative_eq!(quality_score(&with_roe(25.0)), 100.0);
        assert_relative_eq!(quality_score(&with_roe(15.0)), 50.0);
    }

    #[test]
    fn test_quality_clamps() {
        assert_relative_eq!(quality_score(&with_roe(45.0)), 100.0);
        assert_relative_eq!(quality_score(&with_roe(-30.0)), 0.0);
    }
}
