//! Error types for the queries crate.

use thiserror::Error;

/// Errors surfaced by the query layer.
///
/// These are caller mistakes, not data problems: a loaded dataset can
/// always be scanned, but a metric name has to be one the engine knows.
#[derive(Error, Debug)]
pub enum QueryError {
    /// An unrecognized ranking metric was requested
    #[error("unknown {kind} metric {value:?}, expected one of: {expected}")]
    UnknownMetric {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, QueryError>;
