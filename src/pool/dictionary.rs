//! Dictionary file discovery.

use super::PoolError;
use std::path::{Path, PathBuf};

/// Conventional dictionary locations, searched in order.
pub const DEFAULT_DICTIONARY_PATHS: &[&str] = &[
    "/usr/share/dict/words",
    "/usr/dict/words",
    "/usr/share/dict/web2",
    "/usr/share/dict/american-english",
    "/usr/share/dict/british-english",
    "/usr/share/dict/linux.words",
];

fn is_usable(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|meta| meta.is_file() && meta.len() > 0)
        .unwrap_or(false)
}

/// Picks the dictionary for a run.
///
/// An explicit path wins outright but must exist and be non-empty.
/// Otherwise the first usable entry of `candidates` is returned.
pub fn locate_dictionary<P: AsRef<Path>>(
    explicit: Option<&Path>,
    candidates: &[P],
) -> Result<PathBuf, PoolError> {
    let searched: Vec<PathBuf> = match explicit {
        Some(path) => vec![path.to_path_buf()],
        None => candidates.iter().map(|p| p.as_ref().to_path_buf()).collect(),
    };

    match searched.iter().find(|path| is_usable(path)) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Using dictionary");
            Ok(path.clone())
        }
        None => Err(PoolError::NoDictionaryFound { searched }),
    }
}
