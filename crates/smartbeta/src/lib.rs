#![doc(issue_tracker_base_url = "https://github.com/factordynamics/smartbeta/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # smartbeta
//!
//! Smart beta stock recommendations by investor risk profile.
//!
//! smartbeta is an umbrella crate that re-exports all smartbeta sub-crates for
//! convenience. It scores stocks on five factors, combines them into
//! strategy composites, and ranks a universe for a conservative, moderate or
//! aggressive investor.
//!
//! ## Quick Start
//!
//! ```
//! use smartbeta::prelude::*;
//!
//! # fn main() -> smartbeta::Result<()> {
//! let universe = vec![
//!     StockMetrics::new("A", "Alpha", 25.0, 15.0, 2.0, 10.0, 10.0, 20.0)?,
//!     StockMetrics::new("B", "Beta", 10.0, 15.0, 2.0, 10.0, 10.0, 10.0)?,
//! ];
//!
//! let answers = Answers::from_points(&[1, 2, 1, 2, 2])?;
//! let profile = assess(&answers)?.profile;
//!
//! let catalog = StrategyCatalog::default();
//! let ranked = rank(&universe, catalog.strategies(), profile, 10)?;
//! assert_eq!(ranked[0].symbol(), "A");
//! assert_eq!(ranked[0].strategy, "Quality");
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Organization
//!
//! - [`traits`] - Stock records, risk profiles, errors and universe loading
//! - [`factors`] - The five factor scores and their registry
//! - [`rank`] - Strategy catalog and ranking engine
//! - [`assess`] - Risk questionnaire
//! - [`gemini`] - Technical shortlist and narrative generation
//!
//! ## Architecture
//!
//! 1. **Assess** maps questionnaire answers to a risk profile
//! 2. **Factors** score each stock on a 0-100 scale
//! 3. **Strategies** average a subset of factors into a composite
//! 4. **Rank** keeps each stock's best eligible strategy and sorts by score

/// Version information for the smartbeta crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Core Types
// ============================================================================

/// Core types shared by every smartbeta crate.
pub mod traits {
    pub use smartbeta_traits::*;
}

pub use smartbeta_traits::{
    Date, MarketData, Result, RiskProfile, SmartBetaError, StockMetrics, StockUniverse, Symbol,
};

// ============================================================================
// Factors
// ============================================================================

/// Factor scores.
///
/// | Factor | Input | 0 at | 100 at |
/// |--------|-------|------|--------|
/// | quality | ROE % | 5 | 25 |
/// | value | P/E, P/B | 30, 5 | 5, 0.5 |
/// | momentum | 12m return % | -20 | ~40 |
/// | growth | revenue growth % | -10 | 30 |
/// | lowVolatility | volatility % | 30 | 5 |
pub mod factors {
    pub use smartbeta_factors::*;
}

pub use smartbeta_factors::{Factor, FactorScores};

// ============================================================================
// Ranking
// ============================================================================

/// Strategy catalog and ranking engine.
pub mod rank {
    pub use smartbeta_rank::*;
}

pub use smartbeta_rank::{
    RankConfig, RankingEngine, ScoredRecommendation, Strategy, StrategyCatalog, rank,
};

// ============================================================================
// Risk Assessment
// ============================================================================

/// Risk questionnaire.
pub mod assess {
    pub use smartbeta_assess::*;
}

pub use smartbeta_assess::{Answers, Assessment, InvestorProfile, assess};

// ============================================================================
// Narrative
// ============================================================================

/// Technical shortlist and Gemini narrative client.
///
/// Set `GEMINI_API_KEY` in the environment or a `.env` file before calling
/// [`gemini::GeminiClient::from_env`].
pub mod gemini {
    pub use smartbeta_gemini::*;
}

// ============================================================================
// Prelude
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```
/// use smartbeta::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Answers, Factor, RankingEngine, Result, RiskProfile, ScoredRecommendation, SmartBetaError,
        StockMetrics, Strategy, StrategyCatalog, assess, rank,
    };
}
