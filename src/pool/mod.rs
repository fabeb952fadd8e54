//! Word pool construction.
//!
//! Turns a newline-delimited dictionary into the deduplicated,
//! lower-cased candidate list the sampler draws from.

mod bounds;
mod builder;
mod dictionary;

pub use bounds::LengthBounds;
pub use builder::{build_pool, load_pool, WordPool};
pub use dictionary::{locate_dictionary, DEFAULT_DICTIONARY_PATHS};

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while locating or filtering a dictionary.
#[derive(Debug, Error)]
pub enum PoolError {
    #[error("no dictionary found (searched: {})", format_paths(.searched))]
    NoDictionaryFound { searched: Vec<PathBuf> },
    #[error("no words in {origin} with length between {min} and {max}")]
    Empty {
        origin: String,
        min: usize,
        max: usize,
    },
    #[error("failed to read dictionary {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn format_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "nothing".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
