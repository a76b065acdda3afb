//! Ranking metrics for the top-k queries.

use crate::error::QueryError;
use std::str::FromStr;

/// What `top_titles` ranks movies by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleMetric {
    /// Runtime in minutes
    Runtime,
    /// Overview length in characters
    OverviewLength,
}

impl FromStr for TitleMetric {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "runtime" => Ok(TitleMetric::Runtime),
            "overview_length" => Ok(TitleMetric::OverviewLength),
            other => Err(QueryError::UnknownMetric {
                kind: "title",
                value: other.to_string(),
                expected: "runtime, overview_length",
            }),
        }
    }
}

/// What `top_stars` ranks cast members by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarMetric {
    /// Average IMDB rating over all credited occurrences
    Rating,
    /// Average gross over occurrences with a known (non-zero) gross
    Gross,
}

impl FromStr for StarMetric {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rating" => Ok(StarMetric::Rating),
            "gross" => Ok(StarMetric::Gross),
            other => Err(QueryError::UnknownMetric {
                kind: "star",
                value: other.to_string(),
                expected: "rating, gross",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_metric_names_parse() {
        assert_eq!("runtime".parse::<TitleMetric>().unwrap(), TitleMetric::Runtime);
        assert_eq!(
            "overview_length".parse::<TitleMetric>().unwrap(),
            TitleMetric::OverviewLength
        );
        assert_eq!("rating".parse::<StarMetric>().unwrap(), StarMetric::Rating);
        assert_eq!("gross".parse::<StarMetric>().unwrap(), StarMetric::Gross);
    }

    #[test]
    fn unknown_metric_names_are_rejected() {
        let err = "votes".parse::<TitleMetric>().unwrap_err();
        assert!(matches!(
            err,
            QueryError::UnknownMetric { kind: "title", .. }
        ));

        // Metric vocabularies do not leak across query kinds
        let err = "runtime".parse::<StarMetric>().unwrap_err();
        assert!(matches!(err, QueryError::UnknownMetric { kind: "star", .. }));
    }
}
