//! Value factor.
//!
//! Average of two valuation sub-scores, each clamped on its own before
//! averaging:
//! - earnings multiple: P/E of 30 or more scores 0, P/E of 5 or less scores 100
//! - book multiple: P/B of 5 or more scores 0, P/B of 0 scores 100

use smartbeta_traits::StockMetrics;

use crate::clamp_score;

/// P/E at or above which the earnings sub-score is zero.
pub const PE_CEILING: f64 = 30.0;

/// Score points per unit of P/E below the ceiling.
pub const PE_SLOPE: f64 = 4.0;

/// P/B at or above which the book sub-score is zero.
pub const PB_CEILING: f64 = 5.0;

/// Score points per unit of P/B below the ceiling.
pub const PB_SLOPE: f64 = 20.0;

/// Earnings multiple sub-score in `[0, 100]`.
#[must_use]
pub fn earnings_multiple_score(stock: &StockMetrics) -> f64 {
    clamp_score((PE_CEILING - stock.pe_ratio) * PE_SLOPE)
}

/// Book multiple sub-score in `[0, 100]`.
#[must_use]
pub fn book_multiple_score(stock: &StockMetrics) -> f64 {
    clamp_score((PB_CEILING - stock.pb_ratio) * PB_SLOPE)
}

/// Value score in `[0, 100]`.
#[must_use]
pub fn value_score(stock: &StockMetrics) -> f64 {
    (earnings_multiple_score(stock) + book_multiple_score(stock)) / 2.0
}
