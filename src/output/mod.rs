//! Output formatting.

mod wrap;

pub use wrap::{wrap_words, DEFAULT_WIDTH};
