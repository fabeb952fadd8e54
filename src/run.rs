//! One complete run: dictionary to word list.

use crate::config::{ConfigError, EntropyChoice, RunConfig};
use crate::entropy::{DeviceEntropy, EntropyError, EntropySource, OsEntropy};
use crate::pool::{load_pool, locate_dictionary, PoolError, WordPool};
use crate::sampler::{SamplerError, Strategy};
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;
use std::path::PathBuf;
use thiserror::Error;

/// Any failure that aborts a run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Pool(#[from] PoolError),
    #[error(transparent)]
    Entropy(#[from] EntropyError),
    #[error(transparent)]
    Sampler(#[from] SamplerError),
}

/// Opens the entropy source a run asked for.
pub fn open_entropy(choice: &EntropyChoice) -> Result<Box<dyn EntropySource>, EntropyError> {
    let source: Box<dyn EntropySource> = match choice {
        EntropyChoice::Device(path) => Box::new(DeviceEntropy::open(path)?),
        EntropyChoice::Os => Box::new(OsEntropy::new()),
    };
    Ok(source)
}

/// The selected words and where they came from.
#[derive(Debug, Clone)]
pub struct Passphrase {
    words: Vec<String>,
    dictionary: PathBuf,
    pool_size: usize,
    entropy_bytes: u64,
}

impl Passphrase {
    /// Runs the whole pipeline for `config`.
    ///
    /// The entropy source is opened after the pool is built and is
    /// released before this returns, on success or failure.
    pub fn generate(config: &RunConfig) -> Result<Self, RunError> {
        let dictionary = locate_dictionary(config.dictionary.as_deref(), &config.search_paths)?;
        let pool = load_pool(&dictionary, config.bounds)?;
        let pool_size = pool.len();

        let mut entropy = open_entropy(&config.entropy)?;
        let words = select(pool, config.count, config.strategy, &mut entropy)?;

        tracing::info!(
            dictionary = %dictionary.display(),
            pool_size,
            count = words.len(),
            entropy_bytes = entropy.bytes_read(),
            "Generated word list"
        );

        Ok(Self {
            words,
            dictionary,
            pool_size,
            entropy_bytes: entropy.bytes_read(),
        })
    }

    /// Selected words in draw order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Dictionary the pool was built from.
    pub fn dictionary(&self) -> &std::path::Path {
        &self.dictionary
    }

    /// Pool size after filtering.
    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    /// Bytes taken from the entropy source, shuffle seed included.
    pub fn entropy_bytes(&self) -> u64 {
        self.entropy_bytes
    }
}

/// Draws `count` words from `pool` using `strategy`.
///
/// The shuffle strategy seeds a generator owned by this call from 32
/// bytes of `entropy`, shuffles the pool once, then reads no more.
pub fn select<E: EntropySource + ?Sized>(
    pool: WordPool,
    count: usize,
    strategy: Strategy,
    entropy: &mut E,
) -> Result<Vec<String>, RunError> {
    let pool = match strategy {
        Strategy::PerDrawEntropy => pool,
        Strategy::PrecomputedShuffle => {
            let mut seed = [0u8; 32];
            entropy.read_exact(&mut seed)?;
            pool.shuffled(&mut ChaCha20Rng::from_seed(seed))
        }
    };

    let words = strategy.sample(&pool, count, entropy)?;
    Ok(words.into_iter().map(str::to_owned).collect())
}
