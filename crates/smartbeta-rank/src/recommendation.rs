//! Ranked recommendation output.

use serde::Serialize;
use smartbeta_traits::StockMetrics;

/// One stock paired with the strategy it scores best on.
///
/// Borrows the stock and strategy name from the ranking inputs; a fresh list
/// is produced for every ranking request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredRecommendation<'a> {
    /// The recommended stock.
    pub stock: &'a StockMetrics,

    /// Name of the winning strategy.
    pub strategy: &'a str,

    /// Composite score of the winning strategy, in `[0, 100]`.
    pub score: f64,
}

impl ScoredRecommendation<'_> {
    /// Symbol of the recommended stock.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.stock.symbol
    }
}
