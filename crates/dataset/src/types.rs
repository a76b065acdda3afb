//! Core domain types for the movie dataset.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// One parsed movie record, immutable once constructed.
///
/// Field positions in the source file are defined by [`crate::schema::Column`];
/// all type coercion happens in the parser, so a constructed `Movie` is
/// always internally consistent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub released_year: u16,
    /// Age certificate, may be empty
    pub certificate: String,
    pub runtime_minutes: u32,
    /// Deduplicated, unordered genre names
    pub genres: HashSet<String>,
    pub imdb_rating: f32,
    /// Free text; may contain commas, its length is a ranking metric
    pub overview: String,
    /// Kept as raw text: not guaranteed numeric, may be empty
    pub meta_score: String,
    pub director: String,
    /// The four credited cast members, sorted ascending at construction.
    /// Co-star pair canonicalization depends on this ordering.
    pub stars: [String; 4],
    pub num_votes: u64,
    /// Worldwide gross in dollars; 0 when the source field was empty
    /// (absence is not distinguished from zero)
    pub gross: u64,
}

impl Movie {
    /// One (star, rating) data point per credited cast slot.
    pub fn star_ratings(&self) -> impl Iterator<Item = (&str, f32)> {
        self.stars.iter().map(|s| (s.as_str(), self.imdb_rating))
    }

    /// All 6 unordered pairs of credited cast members, in canonical order.
    pub fn co_star_pairs(&self) -> Vec<StarPair> {
        let mut pairs = Vec::with_capacity(6);
        for i in 0..self.stars.len() {
            for j in (i + 1)..self.stars.len() {
                pairs.push(StarPair::new(&self.stars[i], &self.stars[j]));
            }
        }
        pairs
    }

    /// One (star, gross) data point per credited cast slot, but only when
    /// the movie has a known gross. A movie with gross 0 contributes no
    /// data points to any star's gross average.
    pub fn star_grosses(&self) -> impl Iterator<Item = (&str, u64)> {
        self.stars
            .iter()
            .filter(|_| self.gross > 0)
            .map(|s| (s.as_str(), self.gross))
    }

    /// Overview length in characters, the `overview_length` ranking metric.
    pub fn overview_chars(&self) -> usize {
        self.overview.chars().count()
    }
}

/// An unordered pair of cast members appearing in one movie's credits,
/// canonicalized so `first <= second` lexicographically.
///
/// Structural `Eq`/`Hash`/`Ord` make the pair usable as a grouping key:
/// two pairs are the same group iff both names match in order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StarPair {
    pub first: String,
    pub second: String,
}

impl StarPair {
    /// Build a canonical pair from two names, in either order.
    pub fn new(a: &str, b: &str) -> Self {
        if a <= b {
            Self {
                first: a.to_string(),
                second: b.to_string(),
            }
        } else {
            Self {
                first: b.to_string(),
                second: a.to_string(),
            }
        }
    }
}

impl fmt::Display for StarPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} & {}", self.first, self.second)
    }
}

/// The loaded record collection, in file row order.
///
/// Built exactly once by [`Dataset::load`] (or [`Dataset::from_movies`] for
/// in-memory construction) and never mutated afterwards, so it is safe to
/// share behind an `Arc` for concurrent read-only queries.
#[derive(Debug)]
pub struct Dataset {
    pub(crate) movies: Vec<Movie>,
}

impl Dataset {
    /// Build a dataset directly from already-constructed records.
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    /// All records, in file row order.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Movie> {
        self.movies.iter()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Movie;
    type IntoIter = std::slice::Iter<'a, Movie>;

    fn into_iter(self) -> Self::IntoIter {
        self.movies.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie_with_stars(stars: [&str; 4], gross: u64) -> Movie {
        let mut stars = stars.map(str::to_string);
        stars.sort();
        Movie {
            title: "Test".to_string(),
            released_year: 2000,
            certificate: String::new(),
            runtime_minutes: 100,
            genres: HashSet::from(["Drama".to_string()]),
            imdb_rating: 8.0,
            overview: "A test movie.".to_string(),
            meta_score: String::new(),
            director: "Someone".to_string(),
            stars,
            num_votes: 1000,
            gross,
        }
    }

    #[test]
    fn co_star_pairs_are_six_and_canonical() {
        let movie = movie_with_stars(["Zed", "Amy", "Bob", "Cid"], 0);
        let pairs = movie.co_star_pairs();

        assert_eq!(pairs.len(), 6);
        for pair in &pairs {
            assert!(pair.first <= pair.second);
        }
        assert_eq!(pairs[0], StarPair::new("Amy", "Bob"));
        assert_eq!(pairs[5], StarPair::new("Cid", "Zed"));
    }

    #[test]
    fn star_pair_canonicalizes_argument_order() {
        assert_eq!(StarPair::new("Zed", "Amy"), StarPair::new("Amy", "Zed"));
    }

    #[test]
    fn zero_gross_contributes_no_data_points() {
        let movie = movie_with_stars(["A", "B", "C", "D"], 0);
        assert_eq!(movie.star_grosses().count(), 0);

        let movie = movie_with_stars(["A", "B", "C", "D"], 500);
        let grosses: Vec<_> = movie.star_grosses().collect();
        assert_eq!(grosses.len(), 4);
        assert_eq!(grosses[0], ("A", 500));
    }

    #[test]
    fn overview_length_counts_characters_not_bytes() {
        let mut movie = movie_with_stars(["A", "B", "C", "D"], 0);
        movie.overview = "héllo".to_string();
        assert_eq!(movie.overview_chars(), 5);
    }
}
