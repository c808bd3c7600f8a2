#![doc(issue_tracker_base_url = "https://github.com/factordynamics/smartbeta/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core types for the smartbeta recommendation engine.
//!
//! This crate holds the vocabulary shared by every other smartbeta crate:
//! the per-stock metric record, the investor risk profile, the error type,
//! and the adapter that turns a tabular universe into validated records.

/// The version of the smartbeta-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod types;
pub mod universe;

pub use error::{Result, SmartBetaError};
pub use types::{Date, MarketData, RiskProfile, StockMetrics, Symbol};
pub use universe::{StockUniverse, UNIVERSE_COLUMNS};
