//! Benchmarks for the full-scan queries
//!
//! Run with: cargo bench --package queries
//!
//! Uses a synthetic in-memory dataset so the benchmark does not depend on
//! a data file being present.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dataset::{Dataset, Movie};
use queries::{QueryEngine, StarMetric, TitleMetric};
use std::collections::HashSet;
use std::sync::Arc;

const GENRES: &[&str] = &["Drama", "Action", "Comedy", "War", "Crime", "Romance"];

fn synthetic_dataset(size: usize) -> Arc<Dataset> {
    let movies = (0..size)
        .map(|i| {
            let mut stars = [
                format!("Star {}", i % 97),
                format!("Star {}", (i * 7) % 97),
                format!("Star {}", (i * 13) % 97),
                format!("Star {}", (i * 31) % 97),
            ];
            stars.sort();
            Movie {
                title: format!("Movie {i}"),
                released_year: 1950 + (i % 70) as u16,
                certificate: "U".to_string(),
                runtime_minutes: 80 + (i % 120) as u32,
                genres: [GENRES[i % GENRES.len()], GENRES[(i / 2) % GENRES.len()]]
                    .iter()
                    .map(|g| g.to_string())
                    .collect::<HashSet<_>>(),
                imdb_rating: 6.0 + (i % 40) as f32 / 10.0,
                overview: "An overview of plausible length for ranking purposes.".repeat(1 + i % 3),
                meta_score: "75".to_string(),
                director: format!("Director {}", i % 50),
                stars,
                num_votes: 10_000 + i as u64,
                gross: if i % 5 == 0 { 0 } else { 1_000_000 * (i as u64 % 200) },
            }
        })
        .collect();
    Arc::new(Dataset::from_movies(movies))
}

fn bench_counts(c: &mut Criterion) {
    let engine = QueryEngine::new(synthetic_dataset(1000));

    c.bench_function("count_by_year", |b| {
        b.iter(|| black_box(engine.count_by_year()))
    });

    c.bench_function("count_by_genre", |b| {
        b.iter(|| black_box(engine.count_by_genre()))
    });

    c.bench_function("co_star_counts", |b| {
        b.iter(|| black_box(engine.co_star_counts()))
    });
}

fn bench_rankings(c: &mut Criterion) {
    let engine = QueryEngine::new(synthetic_dataset(1000));

    c.bench_function("top_titles_runtime", |b| {
        b.iter(|| black_box(engine.top_titles(black_box(25), TitleMetric::Runtime)))
    });

    c.bench_function("top_stars_gross", |b| {
        b.iter(|| black_box(engine.top_stars(black_box(25), StarMetric::Gross)))
    });
}

fn bench_search(c: &mut Criterion) {
    let engine = QueryEngine::new(synthetic_dataset(1000));

    c.bench_function("search", |b| {
        b.iter(|| black_box(engine.search(black_box("Drama"), black_box(7.0), black_box(150))))
    });
}

criterion_group!(benches, bench_counts, bench_rankings, bench_search);
criterion_main!(benches);
