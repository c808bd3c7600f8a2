//! Factor score library for smartbeta.
//!
//! Each factor maps one raw [`StockMetrics`](smartbeta_traits::StockMetrics)
//! field (or pair of fields) onto a suitability score in `[0, 100]` through a
//! fixed linear mapping clamped at both ends:
//! - Quality: return on equity
//! - Value: price/earnings and price/book, averaged
//! - Momentum: trailing price momentum
//! - Growth: revenue growth
//! - Low volatility: realized volatility, inverted
//!
//! Scores are absolute, not cross-sectional: a stock's score does not depend
//! on the rest of the universe.
//!
//! # Example
//!
//! ```
//! use smartbeta_factors::Factor;
//! use smartbeta_traits::StockMetrics;
//!
//! let stock = StockMetrics::new("HBL", "Habib Bank", 25.0, 10.0, 1.0, 0.0, 0.0, 20.0).unwrap();
//! assert_eq!(Factor::Quality.score(&stock), 100.0);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

mod factor;
pub mod growth;
pub mod low_volatility;
pub mod momentum;
pub mod quality;
pub mod registry;
pub mod value;

pub use factor::{FACTOR_TABLE, Factor, FactorFn, FactorScores};
pub use registry::{FactorInfo, available_factors, get_factor_info};

/// Lowest attainable factor score.
pub const SCORE_MIN: f64 = 0.0;

/// Highest attainable factor score.
pub const SCORE_MAX: f64 = 100.0;

/// Clamp a raw linear mapping into `[SCORE_MIN, SCORE_MAX]`.
#[inline]
pub(crate) fn clamp_score(raw: f64) -> f64 {
    raw.clamp(SCORE_MIN, SCORE_MAX)
}
