//! Record builder and dataset loading.
//!
//! One tokenized row becomes one typed [`Movie`]; one file becomes one
//! [`Dataset`]. Loading is fail-fast: any row that does not tokenize or
//! parse aborts the whole load, so a `Dataset` never under-reports rows.

use crate::error::{DatasetLoadError, MalformedRowError, Result};
use crate::schema::{Column, FIELD_COUNT, RawRow};
use crate::tokenizer::tokenize;
use crate::types::{Dataset, Movie};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info, instrument};

fn parse_number<T: FromStr>(row: &RawRow<'_>, column: Column) -> Result<T, MalformedRowError> {
    let raw = row.field(column);
    raw.parse().map_err(|_| MalformedRowError::InvalidField {
        column: column.name(),
        value: raw.to_string(),
    })
}

/// Runtime fields look like "142 min"; only the leading number matters.
fn parse_runtime(row: &RawRow<'_>) -> Result<u32, MalformedRowError> {
    let raw = row.field(Column::Runtime);
    let leading = raw.split(' ').next().unwrap_or_default();
    leading.parse().map_err(|_| MalformedRowError::InvalidField {
        column: Column::Runtime.name(),
        value: raw.to_string(),
    })
}

/// Empty gross means unknown and maps to 0; a present gross may carry
/// comma grouping separators ("28,341,469").
fn parse_gross(row: &RawRow<'_>) -> Result<u64, MalformedRowError> {
    let raw = row.field(Column::Gross);
    if raw.is_empty() {
        return Ok(0);
    }
    raw.replace(',', "")
        .parse()
        .map_err(|_| MalformedRowError::InvalidField {
            column: Column::Gross.name(),
            value: raw.to_string(),
        })
}

/// Build one [`Movie`] from a schema-checked row.
pub(crate) fn build_movie(row: &RawRow<'_>) -> Result<Movie, MalformedRowError> {
    let mut stars = [
        Column::Star1,
        Column::Star2,
        Column::Star3,
        Column::Star4,
    ]
    .map(|column| row.field(column).to_string());
    // Canonical co-star pair identity depends on this ordering
    stars.sort();

    Ok(Movie {
        title: row.field(Column::Title).to_string(),
        released_year: parse_number(row, Column::ReleasedYear)?,
        certificate: row.field(Column::Certificate).to_string(),
        runtime_minutes: parse_runtime(row)?,
        genres: row
            .field(Column::Genres)
            .split(", ")
            .map(str::to_string)
            .collect(),
        imdb_rating: parse_number(row, Column::ImdbRating)?,
        overview: row.field(Column::Overview).to_string(),
        meta_score: row.field(Column::MetaScore).to_string(),
        director: row.field(Column::Director).to_string(),
        stars,
        num_votes: parse_number(row, Column::NumVotes)?,
        gross: parse_gross(row)?,
    })
}

impl Dataset {
    /// Load a dataset from a comma-delimited UTF-8 file.
    ///
    /// The header line is validated against the schema's column count and
    /// then discarded; every following non-blank line becomes one record,
    /// in file order. Any unreadable file, bad header, or malformed row
    /// fails the whole load.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| DatasetLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let mut lines = contents.lines();
        let header = lines.next().ok_or(DatasetLoadError::MissingHeader)?;
        let header_fields =
            tokenize(header).map_err(|source| DatasetLoadError::MalformedRow { line: 1, source })?;
        if header_fields.len() != FIELD_COUNT {
            return Err(DatasetLoadError::HeaderMismatch {
                expected: FIELD_COUNT,
                found: header_fields.len(),
            });
        }

        let mut movies = Vec::new();
        for (idx, line) in lines.enumerate() {
            // Header sits on line 1
            let line_no = idx + 2;
            if line.trim().is_empty() {
                continue;
            }

            let fields = tokenize(line)
                .map_err(|source| DatasetLoadError::MalformedRow { line: line_no, source })?;
            let row = RawRow::new(&fields)
                .map_err(|source| DatasetLoadError::MalformedRow { line: line_no, source })?;
            let movie = build_movie(&row)
                .map_err(|source| DatasetLoadError::MalformedRow { line: line_no, source })?;

            debug!(line = line_no, title = %movie.title, "parsed row");
            movies.push(movie);
        }

        info!(records = movies.len(), "dataset loaded");
        Ok(Dataset { movies })
    }
}
