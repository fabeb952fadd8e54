//! Entropy sources.
//!
//! The sampler treats entropy as an opaque, strictly sequential byte
//! supplier: it only ever asks for "exactly `k` bytes or failure".
//! Blocking behaviour belongs to the source (a `/dev/random` read may
//! wait for the kernel pool), never to the sampler.

mod device;
mod source;
mod stream;

pub use device::{DeviceEntropy, OsEntropy};
pub use source::{EntropyError, EntropySource};
pub use stream::{ByteStream, RngEntropy};
