//! Filtering a word source into a pool.

use super::{LengthBounds, PoolError};
use rand::seq::SliceRandom;
use rand_core::RngCore;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// The candidate words for a run.
///
/// Every entry is unique, lower-case ASCII letters only, and within the
/// length bounds it was built with. A pool is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPool {
    words: Vec<String>,
}

impl WordPool {
    /// Number of words in the pool (`L`).
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; kept for API symmetry with slices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the word at `index`, if in range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Returns the words in pool order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns the pool reordered by a Fisher-Yates shuffle driven by `rng`.
    ///
    /// Ordering does not affect which words are eligible, only which
    /// ones the simple strategy walks first.
    pub fn shuffled<R: RngCore + ?Sized>(mut self, rng: &mut R) -> Self {
        self.words.shuffle(rng);
        self
    }
}

fn is_candidate(word: &str, bounds: &LengthBounds) -> bool {
    !word.is_empty()
        && word.bytes().all(|b| b.is_ascii_alphabetic())
        && bounds.contains(word.len())
}

/// Builds a pool from dictionary lines.
///
/// The line terminator (`\n` or `\r\n`) is stripped, then lines are kept only if they are purely alphabetic and
/// within `bounds`. Survivors are lower-cased and deduplicated. `origin`
/// names the source in the error when nothing survives.
pub fn build_pool<I, S>(lines: I, bounds: LengthBounds, origin: &str) -> Result<WordPool, PoolError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = 0usize;
    let words: BTreeSet<String> = lines
        .into_iter()
        .inspect(|_| seen += 1)
        .filter_map(|line| {
            let word = line.as_ref().trim_end_matches(|c: char| c == '\n' || c == '\r');
            is_candidate(word, &bounds).then(|| word.to_ascii_lowercase())
        })
        .collect();

    if words.is_empty() {
        return Err(PoolError::Empty {
            origin: origin.to_string(),
            min: bounds.min(),
            max: bounds.max(),
        });
    }

    tracing::debug!(
        lines = seen,
        pool_size = words.len(),
        min = bounds.min(),
        max = bounds.max(),
        "Built word pool"
    );

    Ok(WordPool {
        words: words.into_iter().collect(),
    })
}

/// Reads a dictionary file and builds a pool from it.
///
/// Lines that are not valid UTF-8 are skipped; they could never pass the
/// alphabetic filter anyway.
pub fn load_pool(path: impl AsRef<Path>, bounds: LengthBounds) -> Result<WordPool, PoolError> {
    let path = path.as_ref();
    let read_error = |source| PoolError::Read {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_error)?;
    let mut lines = Vec::new();
    for line in BufReader::new(file).split(b'\n') {
        let line = line.map_err(read_error)?;
        if let Ok(text) = String::from_utf8(line) {
            lines.push(text);
        }
    }

    build_pool(lines, bounds, &path.display().to_string())
}
