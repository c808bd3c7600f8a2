//! Risk-profile ranking engine.

use smartbeta_factors::Factor;
use smartbeta_traits::{Result, RiskProfile, SmartBetaError, StockMetrics};
use tracing::{debug, warn};

use crate::{
    FactorMatrix, ScoredRecommendation, Strategy, StrategyCatalog, catalog::validate_strategies,
};

/// Configuration for a ranking request.
#[derive(Debug, Clone)]
pub struct RankConfig {
    /// Maximum number of recommendations returned (default: 10)
    pub limit: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self { limit: 10 }
    }
}

/// Rank a universe for one risk profile.
///
/// Only strategies tagged with `profile` are considered. Each stock is
/// assigned the strategy with the highest composite score (first in catalog
/// order on ties), then stocks are sorted by that score, highest first, with
/// ties kept in universe order, and the list is cut to `limit` entries.
///
/// An empty universe, or a catalog with no strategy for `profile`, yields an
/// empty list.
///
/// # Errors
///
/// Returns [`SmartBetaError::InvalidArgument`] if `limit` is zero, a stock has
/// an empty symbol or non-finite metric, or a strategy is malformed. All
/// inputs are checked before any scoring happens.
pub fn rank<'a>(
    universe: &'a [StockMetrics],
    catalog: &'a [Strategy],
    profile: RiskProfile,
    limit: usize,
) -> Result<Vec<ScoredRecommendation<'a>>> {
    if limit == 0 {
        return Err(SmartBetaError::invalid("limit must be positive"));
    }
    for stock in universe {
        stock.validate()?;
    }
    validate_strategies(catalog)?;

    let eligible: Vec<(&'a Strategy, Vec<Factor>)> = catalog
        .iter()
        .filter(|s| s.risk_profile == profile)
        .map(|s| (s, s.distinct_factors()))
        .collect();

    if eligible.is_empty() {
        warn!(%profile, "no strategy in catalog matches risk profile");
        return Ok(Vec::new());
    }
    if universe.is_empty() {
        debug!(%profile, "empty universe, nothing to rank");
        return Ok(Vec::new());
    }

    let matrix = FactorMatrix::compute(universe);
    let composites = eligible
        .iter()
        .map(|(_, factors)| matrix.composite(factors))
        .collect::<Result<Vec<_>>>()?;

    let mut recommendations: Vec<ScoredRecommendation<'a>> = universe
        .iter()
        .enumerate()
        .map(|(row, stock)| {
            // Strict comparison keeps the earliest strategy on ties.
            let mut best = 0;
            for k in 1..composites.len() {
                if composites[k][row] > composites[best][row] {
                    best = k;
                }
            }
            ScoredRecommendation {
                stock,
                strategy: eligible[best].0.name.as_str(),
                score: composites[best][row],
            }
        })
        .collect();

    // `sort_by` is stable, so equal scores stay in universe order.
    recommendations.sort_by(|a, b| b.score.total_cmp(&a.score));
    recommendations.truncate(limit);

    debug!(
        %profile,
        universe = universe.len(),
        strategies = eligible.len(),
        returned = recommendations.len(),
        "ranked universe"
    );

    Ok(recommendations)
}

/// A catalog bound to a ranking configuration.
///
/// Convenience for callers that serve many requests against one catalog.
#[derive(Debug, Clone, Default)]
pub struct RankingEngine {
    catalog: StrategyCatalog,
    config: RankConfig,
}

impl RankingEngine {
    /// Create an engine over a validated catalog.
    pub const fn new(catalog: StrategyCatalog, config: RankConfig) -> Self {
        Self { catalog, config }
    }

    /// The strategy catalog.
    pub const fn catalog(&self) -> &StrategyCatalog {
        &self.catalog
    }

    /// The configured recommendation limit.
    pub const fn limit(&self) -> usize {
        self.config.limit
    }

    /// Rank a universe for a risk profile using the configured limit.
    ///
    /// # Errors
    ///
    /// See [`rank`].
    pub fn recommend<'a>(
        &'a self,
        universe: &'a [StockMetrics],
        profile: RiskProfile,
    ) -> Result<Vec<ScoredRecommendation<'a>>> {
        rank(universe, self.catalog.strategies(), profile, self.config.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn stock(symbol: &str, roe: f64, volatility: f64) -> StockMetrics {
        StockMetrics::new(symbol, symbol, roe, 15.0, 2.5, 10.0, 10.0, volatility).unwrap()
    }

    fn conservative_pair() -> Vec<Strategy> {
        vec![
            Strategy::new("Quality", "", RiskProfile::Conservative, [Factor::Quality], 8.5, 12.0),
            Strategy::new(
                "LowVol",
                "",
                RiskProfile::Conservative,
                [Factor::LowVolatility],
                7.8,
                9.5,
            ),
        ]
    }

    fn mock_universe(n: usize) -> Vec<StockMetrics> {
        (0..n)
            .map(|i| {
                let x = i as f64;
                StockMetrics::new(
                    format!("STK{:03}", i + 1),
                    format!("Company {}", i + 1),
                    5.0 + (x * 7.3) % 20.0,
                    5.0 + (x * 3.1) % 25.0,
                    0.5 + (x * 0.7) % 4.5,
                    -10.0 + (x * 11.0) % 40.0,
                    -20.0 + (x * 13.0) % 60.0,
                    5.0 + (x * 5.5) % 25.0,
                )
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_concrete_scenario() {
        let universe = vec![
            stock("A", 25.0, 20.0), // quality 100, lowVol 40
            stock("B", 10.0, 10.0), // quality 25, lowVol 80
            stock("C", 5.0, 30.0),  // quality 0, lowVol 0
        ];
        let catalog = conservative_pair();

        let result = rank(&universe, &catalog, RiskProfile::Conservative, 10).unwrap();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].symbol(), "A");
        assert_eq!(result[0].strategy, "Quality");
        assert_relative_eq!(result[0].score, 100.0);

        assert_eq!(result[1].symbol(), "B");
        assert_eq!(result[1].strategy, "LowVol");
        assert_relative_eq!(result[1].score, 80.0);

        assert_eq!(result[2].symbol(), "C");
        assert_eq!(result[2].strategy, "Quality");
        assert_relative_eq!(result[2].score, 0.0);
    }

    #[test]
    fn test_strategy_tie_goes_to_catalog_order() {
        // quality 100 and lowVol 100
        let universe = vec![stock("A", 25.0, 5.0)];
        let catalog = conservative_pair();

        let result = rank(&universe, &catalog, RiskProfile::Conservative, 5).unwrap();
        assert_eq!(result[0].strategy, "Quality");

        let mut reversed = conservative_pair();
        reversed.reverse();
        let result = rank(&universe, &reversed, RiskProfile::Conservative, 5).unwrap();
        assert_eq!(result[0].strategy, "LowVol");
    }

    #[test]
    fn test_equal_scores_keep_universe_order() {
        let universe = vec![
            stock("LOW", 6.0, 29.0),
            stock("TIE1", 15.0, 29.0),
            stock("TOP", 24.0, 29.0),
            stock("TIE2", 15.0, 29.0),
            stock("TIE3", 15.0, 29.0),
        ];
        let catalog = conservative_pair();
        let result = rank(&universe, &catalog, RiskProfile::Conservative, 10).unwrap();
        let symbols: Vec<_> = result.iter().map(|r| r.symbol()).collect();
        assert_eq!(symbols, vec!["TOP", "TIE1", "TIE2", "TIE3", "LOW"]);
    }

    #[test]
    fn test_output_sorted_and_length_is_min_of_limit_and_universe() {
        let universe = mock_universe(50);
        let catalog = StrategyCatalog::default();

        for profile in RiskProfile::ALL {
            for limit in [1, 7, 50, 80] {
                let result = rank(&universe, catalog.strategies(), profile, limit).unwrap();
                assert_eq!(result.len(), limit.min(universe.len()));
                for pair in result.windows(2) {
                    assert!(pair[0].score >= pair[1].score);
                }
                for rec in &result {
                    assert!((0.0..=100.0).contains(&rec.score));
                    let strategy = catalog.get(rec.strategy).unwrap();
                    assert_eq!(strategy.risk_profile, profile);
                }
            }
        }
    }

    #[test]
    fn test_adjacent_ties_follow_input_order() {
        let universe = mock_universe(40);
        let catalog = StrategyCatalog::default();
        let result = rank(&universe, catalog.strategies(), RiskProfile::Aggressive, 40).unwrap();
        let position = |symbol: &str| universe.iter().position(|s| s.symbol == symbol).unwrap();
        for pair in result.windows(2) {
            if pair[0].score == pair[1].score {
                assert!(position(pair[0].symbol()) < position(pair[1].symbol()));
            }
        }
    }

    #[test]
    fn test_best_strategy_is_maximum() {
        let universe = mock_universe(30);
        let catalog = StrategyCatalog::default();
        let matrix = FactorMatrix::compute(&universe);

        let result = rank(&universe, catalog.strategies(), RiskProfile::Moderate, 30).unwrap();
        for rec in &result {
            let row = universe.iter().position(|s| s.symbol == rec.symbol()).unwrap();
            for strategy in catalog.for_profile(RiskProfile::Moderate) {
                let composite = matrix.composite(&strategy.distinct_factors()).unwrap();
                assert!(composite[row] <= rec.score);
            }
        }
    }

    #[test]
    fn test_no_matching_strategy_yields_empty() {
        let universe = mock_universe(20);
        let catalog = conservative_pair();
        let result = rank(&universe, &catalog, RiskProfile::Aggressive, 10).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_inputs_yield_empty() {
        let catalog = StrategyCatalog::default();
        assert!(
            rank(&[], catalog.strategies(), RiskProfile::Moderate, 10)
                .unwrap()
                .is_empty()
        );
        assert!(
            rank(&mock_universe(3), &[], RiskProfile::Moderate, 10)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        let universe = mock_universe(3);
        let catalog = conservative_pair();
        let result = rank(&universe, &catalog, RiskProfile::Conservative, 0);
        assert!(matches!(result, Err(SmartBetaError::InvalidArgument(_))));

        // Even when the result would otherwise be empty.
        assert!(rank(&[], &[], RiskProfile::Conservative, 0).is_err());
    }

    #[test]
    fn test_non_finite_metric_is_rejected() {
        let mut universe = mock_universe(3);
        universe[1].momentum = f64::NAN;
        let catalog = conservative_pair();
        let result = rank(&universe, &catalog, RiskProfile::Conservative, 10);
        let err = result.unwrap_err();
        assert!(matches!(err, SmartBetaError::InvalidArgument(_)));
        assert!(err.to_string().contains("STK002"));
    }

    #[test]
    fn test_malformed_strategy_is_rejected_even_if_filtered_out() {
        let mut catalog = conservative_pair();
        catalog.push(Strategy::new(
            "Broken",
            "",
            RiskProfile::Aggressive,
            Vec::<Factor>::new(),
            1.0,
            1.0,
        ));
        let universe = mock_universe(3);
        let result = rank(&universe, &catalog, RiskProfile::Conservative, 10);
        assert!(matches!(result, Err(SmartBetaError::InvalidArgument(_))));
    }

    #[test]
    fn test_duplicate_factors_counted_once() {
        // quality 100, value 0
        let universe = vec![StockMetrics::new("A", "A", 25.0, 30.0, 5.0, 0.0, 0.0, 20.0).unwrap()];
        let catalog = vec![Strategy::new(
            "Doubled",
            "",
            RiskProfile::Moderate,
            [Factor::Quality, Factor::Quality, Factor::Value],
            9.0,
            14.0,
        )];
        let result = rank(&universe, &catalog, RiskProfile::Moderate, 1).unwrap();
        assert_relative_eq!(result[0].score, 50.0);
    }

    #[test]
    fn test_idempotent() {
        let universe = mock_universe(25);
        let catalog = StrategyCatalog::default();
        let first = rank(&universe, catalog.strategies(), RiskProfile::Moderate, 10).unwrap();
        let second = rank(&universe, catalog.strategies(), RiskProfile::Moderate, 10).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_engine_uses_configured_limit() {
        let engine = RankingEngine::new(StrategyCatalog::default(), RankConfig { limit: 3 });
        let universe = mock_universe(10);
        let result = engine.recommend(&universe, RiskProfile::Aggressive).unwrap();
        assert_eq!(result.len(), 3);
        assert_eq!(RankingEngine::default().limit(), 10);
        assert_eq!(engine.catalog().len(), 7);
    }
}
