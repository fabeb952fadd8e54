//! The entropy source abstraction.
//!
//! A trait-based seam so that the real device, the operating system RNG
//! and deterministic in-memory streams are interchangeable.

use thiserror::Error;

/// Errors that can occur while acquiring or reading entropy.
#[derive(Debug, Error)]
pub enum EntropyError {
    #[error("entropy source unavailable: {origin}: {reason}")]
    Unavailable { origin: String, reason: String },
    #[error("entropy source {origin} exhausted: wanted {wanted} bytes, got {got}")]
    Exhausted {
        origin: String,
        wanted: usize,
        got: usize,
    },
    #[error("failed to read entropy from {origin}: {reason}")]
    Read { origin: String, reason: String },
}

/// Trait for entropy suppliers.
///
/// Bytes are consumed strictly in order and never replayed. A source
/// that cannot fill the whole buffer must fail rather than return a
/// short read.
pub trait EntropySource {
    /// Fills `buf` completely, or fails.
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), EntropyError>;

    /// Total bytes successfully handed out so far.
    fn bytes_read(&self) -> u64;

    /// Human-readable description of where the bytes come from.
    fn origin(&self) -> &str;
}

impl<S: EntropySource + ?Sized> EntropySource for Box<S> {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), EntropyError> {
        (**self).read_exact(buf)
    }

    fn bytes_read(&self) -> u64 {
        (**self).bytes_read()
    }

    fn origin(&self) -> &str {
        (**self).origin()
    }
}
