//! Statistical checks on selection frequencies.
//!
//! These are sanity checks for the sampler, not proofs of uniformity.
//! A pass means the observed counts are consistent with every index
//! having probability `1/L`.

mod uniformity;

pub use uniformity::{tally, ChiSquare};
