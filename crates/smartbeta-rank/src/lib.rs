//! Strategy ranking for smartbeta.
//!
//! This crate turns a universe of [`StockMetrics`](smartbeta_traits::StockMetrics)
//! into a ranked recommendation list for one investor risk profile:
//!
//! 1. keep the catalog strategies tagged with the requested profile
//! 2. score every stock on every kept strategy (mean of its factor scores)
//! 3. keep each stock's best strategy, first in catalog order on ties
//! 4. sort by score, descending, preserving universe order on ties
//! 5. truncate to the requested limit
//!
//! # Examples
//!
//! ```rust
//! use smartbeta_rank::{StrategyCatalog, rank};
//! use smartbeta_traits::{RiskProfile, StockMetrics};
//!
//! let universe = vec![
//!     StockMetrics::new("HBL", "Habib Bank", 18.0, 7.5, 1.1, 12.0, 8.0, 14.0).unwrap(),
//!     StockMetrics::new("LUCK", "Lucky Cement", 12.0, 14.0, 2.2, 20.0, 25.0, 22.0).unwrap(),
//! ];
//! let catalog = StrategyCatalog::default();
//!
//! let picks = rank(&universe, catalog.strategies(), RiskProfile::Moderate, 10).unwrap();
//! assert_eq!(picks.len(), 2);
//! ```

mod catalog;
mod composite;
mod engine;
mod recommendation;
mod strategy;

pub use catalog::StrategyCatalog;
pub use composite::FactorMatrix;
pub use engine::{RankConfig, RankingEngine, rank};
pub use recommendation::ScoredRecommendation;
pub use strategy::Strategy;
