//! Factor score matrix and equal-weighted strategy composites.

use ndarray::{Array1, Array2, ArrayView1};
use smartbeta_factors::{Factor, FactorScores};
use smartbeta_traits::{Result, SmartBetaError, StockMetrics};

/// Factor scores for a universe: one row per stock, one column per factor
/// in [`Factor::ALL`] order.
///
/// Every factor is evaluated exactly once per stock, however many strategies
/// reference it.
#[derive(Debug, Clone)]
pub struct FactorMatrix {
    scores: Array2<f64>,
}

impl FactorMatrix {
    /// Score every stock on every factor.
    #[must_use]
    pub fn compute(universe: &[StockMetrics]) -> Self {
        let mut scores = Array2::zeros((universe.len(), Factor::COUNT));
        for (row, stock) in universe.iter().enumerate() {
            let factor_scores = FactorScores::compute(stock);
            for factor in Factor::ALL {
                scores[[row, factor.index()]] = factor_scores.get(factor);
            }
        }
        Self { scores }
    }

    /// Number of stocks (rows).
    #[must_use]
    pub fn n_stocks(&self) -> usize {
        self.scores.nrows()
    }

    /// All stocks' scores on one factor.
    #[must_use]
    pub fn column(&self, factor: Factor) -> ArrayView1<'_, f64> {
        self.scores.column(factor.index())
    }

    /// Score of one stock on one factor.
    #[must_use]
    pub fn get(&self, row: usize, factor: Factor) -> Option<f64> {
        self.scores.get([row, factor.index()]).copied()
    }

    /// Equal-weighted mean of the given factor columns.
    ///
    /// `factors` must already be de-duplicated.
    ///
    /// # Errors
    ///
    /// Returns [`SmartBetaError::InvalidArgument`] if `factors` is empty.
    pub fn composite(&self, factors: &[Factor]) -> Result<Array1<f64>> {
        if factors.is_empty() {
            return Err(SmartBetaError::invalid("cannot combine zero factors"));
        }

        let mut composite = Array1::zeros(self.n_stocks());
        for factor in factors {
            composite += &self.column(*factor);
        }
        composite /= factors.len() as f64;

        Ok(composite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn universe() -> Vec<StockMetrics> {
        vec![
            // quality 100, value 50, lowVol 40
            StockMetrics::new("A", "A", 25.0, 5.0, 5.0, 0.0, 0.0, 20.0).unwrap(),
            // quality 25, value 0, lowVol 80
            StockMetrics::new("B", "B", 10.0, 30.0, 5.0, 0.0, 0.0, 10.0).unwrap(),
        ]
    }

    #[test]
    fn test_matrix_shape_and_values() {
        let matrix = FactorMatrix::compute(&universe());
        assert_eq!(matrix.n_stocks(), 2);
        assert_relative_eq!(matrix.get(0, Factor::Quality).unwrap(), 100.0);
        assert_relative_eq!(matrix.get(1, Factor::LowVolatility).unwrap(), 80.0);
        assert!(matrix.get(2, Factor::Quality).is_none());
    }

    #[test]
    fn test_composite_is_mean() {
        let matrix = FactorMatrix::compute(&universe());
        let composite = matrix.composite(&[Factor::Quality, Factor::Value]).unwrap();
        assert_relative_eq!(composite[0], 75.0);
        assert_relative_eq!(composite[1], 12.5);
    }

    #[test]
    fn test_single_factor_composite_equals_column() {
        let matrix = FactorMatrix::compute(&universe());
        let composite = matrix.composite(&[Factor::LowVolatility]).unwrap();
        assert_eq!(composite.view(), matrix.column(Factor::LowVolatility));
    }

    #[test]
    fn test_empty_factors() {
        let matrix = FactorMatrix::compute(&universe());
        assert!(matrix.composite(&[]).is_err());
    }

    #[test]
    fn test_empty_universe() {
        let matrix = FactorMatrix::compute(&[]);
        assert_eq!(matrix.n_stocks(), 0);
        assert_eq!(matrix.composite(&[Factor::Growth]).unwrap().len(), 0);
    }
}
