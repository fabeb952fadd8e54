//! Entropy Words Library
//!
//! Draws passphrase word lists (the "correct horse battery staple"
//! method) from a dictionary, using a strong entropy source instead of a
//! pseudorandom generator.
//!
//! # Architecture
//!
//! ```text
//! dictionary → pool → sampler → output
//!                        ↑
//!                     entropy
//! ```
//!
//! # Design Principles
//!
//! - **Entropy is opaque**: the sampler only asks for "exactly `k` bytes"
//! - **Minimal consumption**: each draw reads the fewest bytes covering the pool
//! - **Running-sum modulus**: indices are reduced from an accumulator that is
//!   never reset, so modulo surplus does not stay on fixed positions
//! - **All-or-nothing**: a short entropy read aborts the run
//!
//! # Example
//!
//! ```
//! use entropy_words::{
//!     entropy::ByteStream,
//!     pool::{build_pool, LengthBounds},
//!     sampler::sample,
//! };
//!
//! let pool = build_pool(
//!     ["correct", "horse", "battery", "staple"],
//!     LengthBounds::normalized(3, 8),
//!     "inline",
//! )
//! .unwrap();
//!
//! let mut entropy = ByteStream::new(vec![1, 2, 3]);
//! let words = sample(&pool, 3, &mut entropy).unwrap();
//! assert_eq!(words, ["correct", "staple", "horse"]);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod entropy;
pub mod output;
pub mod pool;
pub mod run;
pub mod sampler;

// Re-export commonly used types at crate root
pub use config::{FileConfig, Overrides, RunConfig};
pub use entropy::{ByteStream, DeviceEntropy, EntropyError, EntropySource, OsEntropy, RngEntropy};
pub use pool::{LengthBounds, PoolError, WordPool};
pub use run::{Passphrase, RunError};
pub use sampler::{byte_width, sample, Sampler, SamplerError, Strategy};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
