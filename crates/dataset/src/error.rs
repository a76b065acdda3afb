//! Error types for the dataset crate.

use thiserror::Error;

/// A single row could not be turned into a [`crate::Movie`].
///
/// These are always fatal to the whole load: a dataset with silently
/// skipped rows would report a surprising record count to callers.
#[derive(Error, Debug)]
pub enum MalformedRowError {
    /// A quoted field was opened but never closed before end of line
    #[error("unterminated quoted field")]
    UnterminatedQuote,

    /// The row does not carry the expected number of fields
    #[error("expected {expected} fields but found {found}")]
    FieldCount { expected: usize, found: usize },

    /// A typed field failed to parse (year, rating, runtime, votes, gross)
    #[error("invalid value for {column}: {value:?}")]
    InvalidField {
        column: &'static str,
        value: String,
    },
}

/// Errors that can occur while loading a dataset file.
///
/// No partial dataset is ever exposed: any variant here means the caller
/// got no `Dataset` at all.
#[derive(Error, Debug)]
pub enum DatasetLoadError {
    /// File could not be opened or read
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// File is empty, there is no header line to validate
    #[error("dataset file has no header line")]
    MissingHeader,

    /// Header column count does not match the known schema
    #[error("header has {found} columns, expected {expected}")]
    HeaderMismatch { expected: usize, found: usize },

    /// A data row failed to tokenize or parse, with its 1-based file line
    #[error("line {line}: {source}")]
    MalformedRow {
        line: usize,
        #[source]
        source: MalformedRowError,
    },
}

/// Convenience type alias for Results in this crate.
///
/// Defaults to the load error; row-level helpers override `E` with
/// [`MalformedRowError`].
pub type Result<T, E = DatasetLoadError> = std::result::Result<T, E>;
