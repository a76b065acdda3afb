//! Named schema for the fixed 16-column dataset layout.
//!
//! The source file has a fixed field order; mapping positions through a
//! named enum instead of bare indices keeps the contract self-documenting
//! and lets the loader fail loudly when a header does not match.

use crate::error::MalformedRowError;

/// Number of columns every header and data row must carry.
pub const FIELD_COUNT: usize = 16;

/// The dataset's columns, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// Leading row index, unused
    Index,
    Title,
    ReleasedYear,
    Certificate,
    /// "<N> min" style field
    Runtime,
    /// ", "-separated genre list
    Genres,
    ImdbRating,
    Overview,
    MetaScore,
    Director,
    Star1,
    Star2,
    Star3,
    Star4,
    NumVotes,
    /// Optionally comma-grouped digits, or empty
    Gross,
}

impl Column {
    pub const fn position(self) -> usize {
        self as usize
    }

    /// Column name used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Column::Index => "index",
            Column::Title => "title",
            Column::ReleasedYear => "released_year",
            Column::Certificate => "certificate",
            Column::Runtime => "runtime",
            Column::Genres => "genres",
            Column::ImdbRating => "imdb_rating",
            Column::Overview => "overview",
            Column::MetaScore => "meta_score",
            Column::Director => "director",
            Column::Star1 => "star1",
            Column::Star2 => "star2",
            Column::Star3 => "star3",
            Column::Star4 => "star4",
            Column::NumVotes => "num_votes",
            Column::Gross => "gross",
        }
    }
}

/// A tokenized row whose field count has been checked against the schema.
///
/// Resolving fields through [`Column`] rather than raw indices means the
/// record builder cannot silently read the wrong position.
#[derive(Debug)]
pub struct RawRow<'a> {
    fields: &'a [String],
}

impl<'a> RawRow<'a> {
    pub fn new(fields: &'a [String]) -> Result<Self, MalformedRowError> {
        if fields.len() != FIELD_COUNT {
            return Err(MalformedRowError::FieldCount {
                expected: FIELD_COUNT,
                found: fields.len(),
            });
        }
        Ok(Self { fields })
    }

    pub fn field(&self, column: Column) -> &'a str {
        &self.fields[column.position()]
    }
}
