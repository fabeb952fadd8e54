//! Per-draw sampling with a running sum.

use super::{byte_width, SamplerError};
use crate::entropy::EntropySource;
use crate::pool::WordPool;

/// Selection state for one run.
///
/// Holds the only mutable state of the algorithm: the running sum of all
/// raw samples drawn so far. It is never reset.
#[derive(Debug)]
pub struct Sampler<'p> {
    pool: &'p WordPool,
    byte_width: usize,
    /// Each draw adds less than `2^64` and a run has at most
    /// `usize::MAX` draws, so a `u128` cannot wrap.
    running_sum: u128,
    draws: u64,
}

impl<'p> Sampler<'p> {
    /// Creates a sampler over `pool` with a zeroed running sum.
    pub fn new(pool: &'p WordPool) -> Result<Self, SamplerError> {
        if pool.is_empty() {
            return Err(SamplerError::EmptyPool);
        }

        Ok(Self {
            pool,
            byte_width: byte_width(pool.len()),
            running_sum: 0,
            draws: 0,
        })
    }

    /// Bytes of entropy consumed per draw.
    #[inline]
    pub fn byte_width(&self) -> usize {
        self.byte_width
    }

    /// Current value of the accumulator.
    #[inline]
    pub fn running_sum(&self) -> u128 {
        self.running_sum
    }

    /// Draws performed so far.
    #[inline]
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Reads one sample and returns the next pool index.
    ///
    /// The sample is `byte_width` bytes interpreted big-endian.
    pub fn next_index<E: EntropySource + ?Sized>(
        &mut self,
        entropy: &mut E,
    ) -> Result<usize, SamplerError> {
        let mut buf = [0u8; 16];
        let offset = buf.len() - self.byte_width;
        entropy.read_exact(&mut buf[offset..])?;
        let sample = u128::from_be_bytes(buf);

        self.running_sum += sample;
        self.draws += 1;

        let index = (self.running_sum % self.pool.len() as u128) as usize;
        tracing::trace!(draw = self.draws, index, "Drew index");
        Ok(index)
    }

    /// Reads one sample and returns the selected word.
    pub fn next_word<E: EntropySource + ?Sized>(
        &mut self,
        entropy: &mut E,
    ) -> Result<&'p str, SamplerError> {
        let index = self.next_index(entropy)?;
        let pool: &'p WordPool = self.pool;
        Ok(&pool.words()[index])
    }
}

/// Draws `count` words, consuming `count * byte_width(L)` entropy bytes.
///
/// Words may repeat and `count` may exceed the pool size. Any entropy
/// failure aborts the whole run; no partial list is returned.
pub fn sample<'p, E: EntropySource + ?Sized>(
    pool: &'p WordPool,
    count: usize,
    entropy: &mut E,
) -> Result<Vec<&'p str>, SamplerError> {
    if count == 0 {
        return Err(SamplerError::ZeroCount);
    }

    let mut sampler = Sampler::new(pool)?;
    let words = (0..count)
        .map(|_| sampler.next_word(&mut *entropy))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        count,
        pool_size = pool.len(),
        byte_width = sampler.byte_width(),
        "Sampled words with per-draw entropy"
    );

    Ok(words)
}

/// Returns the first `count` words of an already shuffled pool, wrapping
/// around when `count` exceeds the pool size.
pub fn walk(pool: &WordPool, count: usize) -> Result<Vec<&str>, SamplerError> {
    if count == 0 {
        return Err(SamplerError::ZeroCount);
    }
    if pool.is_empty() {
        return Err(SamplerError::EmptyPool);
    }

    Ok(pool
        .words()
        .iter()
        .cycle()
        .take(count)
        .map(String::as_str)
        .collect())
}
