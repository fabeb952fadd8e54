//! Unbiased word selection.
//!
//! Converts fixed-width entropy samples into pool indices using a
//! running-sum modulus: each raw sample is added to an accumulator that
//! is never reset, and the index is the accumulator reduced modulo the
//! pool size.
//!
//! # Bias
//!
//! A plain `r mod L` favours low indices whenever `256^b` is not a
//! multiple of `L`. Fixed-point scaling (`L * r / 256^b`) instead gives a
//! picket-fence pattern where particular indices are always favoured.
//! Accumulating before reducing makes each index depend on every prior
//! draw, so the surplus does not stay pinned to fixed positions.
//!
//! Consecutive draws are coupled: draw `n+1` is the previous sum plus a
//! fresh sample. This is accepted behaviour and must be preserved.

mod draw;
mod strategy;
mod width;

pub use draw::{sample, walk, Sampler};
pub use strategy::Strategy;
pub use width::byte_width;

use crate::entropy::EntropyError;
use thiserror::Error;

/// Errors that can occur while drawing words.
#[derive(Debug, Error)]
pub enum SamplerError {
    #[error("cannot sample from an empty pool")]
    EmptyPool,
    #[error("word count must be at least 1")]
    ZeroCount,
    #[error(transparent)]
    Entropy(#[from] EntropyError),
}
