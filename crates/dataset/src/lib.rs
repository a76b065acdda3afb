//! # Dataset Crate
//!
//! Loads a comma-delimited movie dataset into a typed, immutable,
//! in-memory record collection.
//!
//! ## Main Components
//!
//! - **tokenizer**: Split one raw line into field strings, respecting quoting
//! - **schema**: Named 16-column layout and schema-checked row views
//! - **parser**: Build typed records and load whole files
//! - **types**: `Movie`, `StarPair`, `Dataset`
//! - **error**: Load and row errors
//!
//! ## Example Usage
//!
//! ```ignore
//! use dataset::Dataset;
//!
//! let dataset = Dataset::load("data/imdb_top_1000.csv")?;
//! println!("loaded {} movies", dataset.len());
//! for movie in &dataset {
//!     println!("{} ({})", movie.title, movie.released_year);
//! }
//! ```
//!
//! Loading is fail-fast: a missing file, a header that does not carry the
//! expected 16 columns, or any malformed row yields an error and no
//! partial dataset. After construction the dataset is immutable and can
//! be shared behind an `Arc` for concurrent read-only queries.

// Public modules
pub mod error;
pub mod schema;
pub mod tokenizer;
pub mod types;

mod parser;

// Re-export commonly used types for convenience
pub use error::{DatasetLoadError, MalformedRowError, Result};
pub use types::{Dataset, Movie, StarPair};
