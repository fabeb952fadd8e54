//! Selection strategies.

use super::{draw, SamplerError};
use crate::entropy::EntropySource;
use crate::pool::WordPool;
use serde::{Deserialize, Serialize};

/// How words are picked from the pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Fresh entropy for every draw, reduced through the running sum.
    #[default]
    #[serde(rename = "per-draw")]
    PerDrawEntropy,
    /// Walk a pool that was shuffled once up front; no per-draw entropy.
    #[serde(rename = "shuffle")]
    PrecomputedShuffle,
}

impl Strategy {
    /// Draws `count` words from `pool` with this strategy.
    ///
    /// For [`Strategy::PrecomputedShuffle`] the pool must already be in
    /// its shuffled order and `entropy` is not touched.
    pub fn sample<'p, E: EntropySource + ?Sized>(
        self,
        pool: &'p WordPool,
        count: usize,
        entropy: &mut E,
    ) -> Result<Vec<&'p str>, SamplerError> {
        match self {
            Strategy::PerDrawEntropy => draw::sample(pool, count, entropy),
            Strategy::PrecomputedShuffle => draw::walk(pool, count),
        }
    }
}
