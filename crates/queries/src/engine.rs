//! The aggregation engine: pure query functions over a shared dataset.
//!
//! Every query re-derives its result from the full record sequence on
//! every call. There are no cached indices, so results are always
//! consistent with the loaded dataset. Orderings are total and
//! deterministic: each sort key carries an explicit tie-break.

use crate::error::Result;
use crate::metric::{StarMetric, TitleMetric};
use dataset::{Dataset, StarPair};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::debug;

/// Read-only query surface over an immutable [`Dataset`].
///
/// Holds the dataset behind an `Arc`, so any number of engines (or
/// threads) can query the same records without copying them.
#[derive(Clone)]
pub struct QueryEngine {
    dataset: Arc<Dataset>,
}

impl QueryEngine {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Movie count per release year, ordered by year descending.
    pub fn count_by_year(&self) -> Vec<(u16, usize)> {
        let mut counts: BTreeMap<u16, usize> = BTreeMap::new();
        for movie in &*self.dataset {
            *counts.entry(movie.released_year).or_default() += 1;
        }
        counts.into_iter().rev().collect()
    }

    /// Movie count per genre, ordered by count descending, then genre
    /// ascending. A movie contributes 1 to every genre it carries.
    pub fn count_by_genre(&self) -> Vec<(String, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for movie in &*self.dataset {
            for genre in &movie.genres {
                *counts.entry(genre.as_str()).or_default() += 1;
            }
        }

        let mut ranked: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(genre, count)| (genre.to_string(), count))
            .collect();
        ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked
    }

    /// Co-appearance count per canonical star pair, ordered by count
    /// descending, then pair ascending.
    pub fn co_star_counts(&self) -> Vec<(StarPair, usize)> {
        let mut counts: HashMap<StarPair, usize> = HashMap::new();
        for movie in &*self.dataset {
            for pair in movie.co_star_pairs() {
                *counts.entry(pair).or_default() += 1;
            }
        }

        let mut ranked: Vec<(StarPair, usize)> = counts.into_iter().collect();
        ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        debug!(pairs = ranked.len(), "computed co-star counts");
        ranked
    }

    /// Up to `k` titles ranked by the metric descending, title ascending.
    ///
    /// `k` past the dataset size returns everything; duplicate titles are
    /// legal and preserved.
    pub fn top_titles(&self, k: usize, by: TitleMetric) -> Vec<String> {
        let mut ranked: Vec<(u64, &str)> = self
            .dataset
            .iter()
            .map(|movie| {
                let key = match by {
                    TitleMetric::Runtime => u64::from(movie.runtime_minutes),
                    TitleMetric::OverviewLength => movie.overview_chars() as u64,
                };
                (key, movie.title.as_str())
            })
            .collect();
        ranked.sort_unstable_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1)));

        ranked
            .into_iter()
            .take(k)
            .map(|(_, title)| title.to_string())
            .collect()
    }

    /// [`top_titles`](Self::top_titles) with the metric given by name.
    pub fn top_titles_by(&self, k: usize, by: &str) -> Result<Vec<String>> {
        Ok(self.top_titles(k, by.parse()?))
    }

    /// Up to `k` star names ranked by average metric descending, name
    /// ascending.
    ///
    /// Every credited slot is one occurrence, so a star appearing in
    /// several movies averages over all of them. For the gross metric,
    /// occurrences from movies with unknown (zero) gross contribute no
    /// data points at all rather than averaging in as zero.
    pub fn top_stars(&self, k: usize, by: StarMetric) -> Vec<String> {
        let mut sums: HashMap<&str, (f64, usize)> = HashMap::new();
        for movie in &*self.dataset {
            match by {
                StarMetric::Rating => {
                    for (star, rating) in movie.star_ratings() {
                        let entry = sums.entry(star).or_default();
                        entry.0 += f64::from(rating);
                        entry.1 += 1;
                    }
                }
                StarMetric::Gross => {
                    for (star, gross) in movie.star_grosses() {
                        let entry = sums.entry(star).or_default();
                        entry.0 += gross as f64;
                        entry.1 += 1;
                    }
                }
            }
        }

        let mut averages: Vec<(f64, &str)> = sums
            .into_iter()
            .map(|(star, (sum, occurrences))| (sum / occurrences as f64, star))
            .collect();
        averages.sort_unstable_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));

        averages
            .into_iter()
            .take(k)
            .map(|(_, star)| star.to_string())
            .collect()
    }

    /// [`top_stars`](Self::top_stars) with the metric given by name.
    pub fn top_stars_by(&self, k: usize, by: &str) -> Result<Vec<String>> {
        Ok(self.top_stars(k, by.parse()?))
    }

    /// Titles of movies carrying `genre`, rated at least `min_rating` and
    /// running at most `max_runtime` minutes, sorted ascending.
    ///
    /// Genre matching is exact and case-sensitive. No match is an empty
    /// result, not an error.
    pub fn search(&self, genre: &str, min_rating: f32, max_runtime: u32) -> Vec<String> {
        let mut titles: Vec<&str> = self
            .dataset
            .iter()
            .filter(|movie| movie.genres.contains(genre))
            .filter(|movie| movie.imdb_rating >= min_rating)
            .filter(|movie| movie.runtime_minutes <= max_runtime)
            .map(|movie| movie.title.as_str())
            .collect();
        titles.sort_unstable();
        titles.into_iter().map(str::to_string).collect()
    }
}
