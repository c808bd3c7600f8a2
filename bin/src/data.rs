//! Data loading utilities for the smartbeta CLI.

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smartbeta_gemini::{FALLBACK_TICKERS, TechnicalSnapshot};
use smartbeta_rank::StrategyCatalog;
use smartbeta_traits::{StockMetrics, StockUniverse};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Where to take the stock universe from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum UniverseSource {
    /// A `.csv` or `.json` file.
    File(PathBuf),
    /// A generated universe.
    Mock { count: usize, seed: u64 },
}

impl UniverseSource {
    pub(crate) fn describe(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Mock { count, seed } => format!("{count} generated stocks (seed {seed})"),
        }
    }
}

/// Load the universe from its source.
pub(crate) fn load_universe(source: &UniverseSource) -> Result<StockUniverse> {
    let universe = match source {
        UniverseSource::File(path) => load_universe_file(path)?,
        UniverseSource::Mock { count, seed } => StockUniverse::new(mock_universe(*count, *seed))?,
    };
    info!(stocks = universe.len(), source = %source.describe(), "loaded universe");
    Ok(universe)
}

fn load_universe_file(path: &Path) -> Result<StockUniverse> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Ok(StockUniverse::from_json_str(&json)?)
    } else {
        StockUniverse::from_csv(path).with_context(|| format!("loading {}", path.display()))
    }
}

/// Generate `count` stocks with uniformly drawn metrics.
///
/// The same seed always yields the same universe.
pub(crate) fn mock_universe(count: usize, seed: u64) -> Vec<StockMetrics> {
    let mut rng = StdRng::seed_from_u64(seed);
    (1..=count)
        .map(|i| StockMetrics {
            symbol: format!("STK{i:03}"),
            name: format!("Company {i}"),
            roe: rng.gen_range(5.0..25.0),
            pe_ratio: rng.gen_range(5.0..30.0),
            pb_ratio: rng.gen_range(0.5..5.0),
            revenue_growth: rng.gen_range(-10.0..30.0),
            momentum: rng.gen_range(-20.0..40.0),
            volatility: rng.gen_range(5.0..30.0),
        })
        .collect()
}

/// Load a strategy catalog file, or the built-in catalog.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<StrategyCatalog> {
    match path {
        Some(path) => StrategyCatalog::from_path(path)
            .with_context(|| format!("loading catalog {}", path.display())),
        None => Ok(StrategyCatalog::default()),
    }
}

/// Load technical snapshots, falling back to the default tickers with no
/// indicators.
pub(crate) fn load_technicals(path: Option<&Path>) -> Result<Vec<TechnicalSnapshot>> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let snapshots: Vec<TechnicalSnapshot> = serde_json::from_str(&json)
                .with_context(|| format!("parsing technicals {}", path.display()))?;
            info!(snapshots = snapshots.len(), "loaded technical snapshots");
            Ok(snapshots)
        }
        None => {
            warn!("no technical snapshots supplied, using fallback tickers without indicators");
            Ok(fallback_technicals())
        }
    }
}

pub(crate) fn fallback_technicals() -> Vec<TechnicalSnapshot> {
    FALLBACK_TICKERS
        .iter()
        .map(|ticker| TechnicalSnapshot::unavailable(format!("{ticker}.KAR")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_universe_ranges() {
        let stocks = mock_universe(50, 7);
        assert_eq!(stocks.len(), 50);
        assert_eq!(stocks[0].symbol, "STK001");
        assert_eq!(stocks[49].name, "Company 50");
        for s in &stocks {
            assert!((5.0..25.0).contains(&s.roe));
            assert!((5.0..30.0).contains(&s.pe_ratio));
            assert!((0.5..5.0).contains(&s.pb_ratio));
            assert!((-10.0..30.0).contains(&s.revenue_growth));
            assert!((-20.0..40.0).contains(&s.momentum));
            assert!((5.0..30.0).contains(&s.volatility));
            assert!(s.validate().is_ok());
        }
    }

    #[test]
    fn test_mock_universe_is_seeded() {
        assert_eq!(mock_universe(10, 1), mock_universe(10, 1));
        assert_ne!(mock_universe(10, 1), mock_universe(10, 2));
        assert!(mock_universe(0, 1).is_empty());
    }

    #[test]
    fn test_load_mock_source() {
        let universe = load_universe(&UniverseSource::Mock { count: 3, seed: 9 }).unwrap();
        assert_eq!(universe.len(), 3);
    }

    #[test]
    fn test_missing_file() {
        let source = UniverseSource::File(PathBuf::from("does/not/exist.csv"));
        assert!(load_universe(&source).is_err());
        assert!(load_catalog(Some(Path::new("does/not/exist.json"))).is_err());
    }

    #[test]
    fn test_fallback_technicals() {
        let snapshots = fallback_technicals();
        assert_eq!(snapshots.len(), FALLBACK_TICKERS.len());
        assert_eq!(snapshots[0].ticker, "ATRL.KAR");
        assert!(snapshots.iter().all(|s| s.rating.is_none()));
    }
}
