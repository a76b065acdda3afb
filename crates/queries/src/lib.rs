//! # Queries Crate
//!
//! The aggregation engine over a loaded [`dataset::Dataset`]: grouped
//! counts, averages, multi-key ranked top-k lists, and multi-predicate
//! search.
//!
//! ## Example Usage
//!
//! ```ignore
//! use dataset::Dataset;
//! use queries::{QueryEngine, StarMetric};
//! use std::sync::Arc;
//!
//! let dataset = Arc::new(Dataset::load("data/imdb_top_1000.csv")?);
//! let engine = QueryEngine::new(dataset);
//!
//! for (year, count) in engine.count_by_year() {
//!     println!("{year}: {count}");
//! }
//! let best_paid = engine.top_stars(5, StarMetric::Gross);
//! ```
//!
//! Every query is a pure full scan of the record sequence; nothing is
//! cached between calls and nothing is mutated, so one engine (or clones
//! of it) can serve any number of callers.

pub mod engine;
pub mod error;
pub mod metric;

// Re-export main types
pub use engine::QueryEngine;
pub use error::{QueryError, Result};
pub use metric::{StarMetric, TitleMetric};
