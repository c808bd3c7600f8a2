//! Growth factor.
//!
//! Revenue growth of -10% scores 0, +30% scores 100.

use smartbeta_traits::StockMetrics;

use crate::clamp_score;

/// Revenue growth (percent) offset added before scaling.
pub const GROWTH_OFFSET: f64 = 10.0;

/// Score points per percentage point of revenue growth.
pub const GROWTH_SLOPE: f64 = 2.5;

/// Growth score in `[0, 100]`.
#[must_use]
pub fn growth_score(stock: &StockMetrics) -> f64 {
    clamp_score((stock.revenue_growth + GROWTH_OFFSET) * GROWTH_SLOPE)
}
