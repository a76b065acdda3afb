use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dataset::Dataset;
use queries::QueryEngine;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// ReelStats - Movie Dataset Analytics
#[derive(Parser)]
#[command(name = "reel-stats")]
#[command(about = "Analytical queries over a movie dataset", long_about = None)]
struct Cli {
    /// Path to the movie dataset file
    #[arg(short, long, default_value = "data/imdb_top_1000.csv")]
    data: PathBuf,

    /// Emit results as JSON instead of formatted text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Movie counts per release year, newest first
    Years,

    /// Movie counts per genre, most frequent first
    Genres,

    /// Co-appearance counts between credited cast members
    CoStars {
        /// Number of pairs to display
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Top movies by a ranking metric
    TopTitles {
        /// Number of titles to return
        #[arg(short, long, default_value = "10")]
        k: usize,

        /// Metric to rank by: "runtime" or "overview_length"
        #[arg(long)]
        by: String,
    },

    /// Top cast members by a ranking metric
    TopStars {
        /// Number of names to return
        #[arg(short, long, default_value = "10")]
        k: usize,

        /// Metric to rank by: "rating" or "gross"
        #[arg(long)]
        by: String,
    },

    /// Titles matching a genre, a rating floor and a runtime ceiling
    Search {
        /// Genre that must be present (exact, case-sensitive)
        #[arg(long)]
        genre: String,

        /// Minimum IMDB rating, inclusive
        #[arg(long)]
        min_rating: f32,

        /// Maximum runtime in minutes, inclusive
        #[arg(long)]
        max_runtime: u32,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let dataset = Dataset::load(&cli.data)
        .with_context(|| format!("Failed to load dataset from {}", cli.data.display()))?;
    eprintln!(
        "{} Loaded {} movies in {:?}",
        "✓".green(),
        dataset.len(),
        start.elapsed()
    );

    let engine = QueryEngine::new(Arc::new(dataset));

    match cli.command {
        Commands::Years => {
            let counts = engine.count_by_year();
            print_counts(cli.json, "Movies per year", counts)?;
        }
        Commands::Genres => {
            let counts = engine.count_by_genre();
            print_counts(cli.json, "Movies per genre", counts)?;
        }
        Commands::CoStars { limit } => {
            let mut counts = engine.co_star_counts();
            counts.truncate(limit);
            if cli.json {
                print_json(&counts)?;
            } else {
                println!("{}", "Co-star appearances".bold().blue());
                for (pair, count) in &counts {
                    println!("  {} {}", format!("{count:>4}").cyan(), pair);
                }
            }
        }
        Commands::TopTitles { k, by } => {
            let titles = engine.top_titles_by(k, &by)?;
            print_ranked(cli.json, &format!("Top {k} titles by {by}"), titles)?;
        }
        Commands::TopStars { k, by } => {
            let stars = engine.top_stars_by(k, &by)?;
            print_ranked(cli.json, &format!("Top {k} stars by {by}"), stars)?;
        }
        Commands::Search {
            genre,
            min_rating,
            max_runtime,
        } => {
            let titles = engine.search(&genre, min_rating, max_runtime);
            if cli.json {
                print_json(&titles)?;
            } else {
                println!(
                    "{}",
                    format!(
                        "{} movies: genre {genre:?}, rating >= {min_rating}, runtime <= {max_runtime} min",
                        titles.len()
                    )
                    .bold()
                    .blue()
                );
                for title in &titles {
                    println!("  - {title}");
                }
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to serialize result")?;
    println!("{rendered}");
    Ok(())
}

/// Print an ordered (key, count) listing.
fn print_counts<K: std::fmt::Display + Serialize>(
    json: bool,
    header: &str,
    counts: Vec<(K, usize)>,
) -> Result<()> {
    if json {
        return print_json(&counts);
    }
    println!("{}", header.bold().blue());
    for (key, count) in &counts {
        println!("  {} {}", format!("{count:>4}").cyan(), key);
    }
    Ok(())
}

/// Print an ordered name listing with rank numbers.
fn print_ranked(json: bool, header: &str, names: Vec<String>) -> Result<()> {
    if json {
        return print_json(&names);
    }
    println!("{}", header.bold().blue());
    for (rank, name) in names.iter().enumerate() {
        println!("{}. {}", (rank + 1).to_string().green(), name);
    }
    Ok(())
}
