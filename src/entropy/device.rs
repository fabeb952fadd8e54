//! Operating system entropy: character devices and `getrandom`.

use super::{EntropyError, EntropySource};
use rand_core::{OsRng, RngCore};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

/// Entropy read from a file or character device such as `/dev/random`.
///
/// The handle is held for the lifetime of the value and released on drop,
/// including when a run aborts part way through.
#[derive(Debug)]
pub struct DeviceEntropy {
    file: File,
    path: PathBuf,
    origin: String,
    bytes_read: u64,
}

impl DeviceEntropy {
    /// The blocking kernel pool.
    pub const DEFAULT_PATH: &'static str = "/dev/random";

    /// Opens the device at `path` for reading.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, EntropyError> {
        let path = path.as_ref().to_path_buf();
        let origin = path.display().to_string();
        let file = File::open(&path).map_err(|e| EntropyError::Unavailable {
            origin: origin.clone(),
            reason: e.to_string(),
        })?;

        tracing::debug!(path = %origin, "Opened entropy device");

        Ok(Self {
            file,
            path,
            origin,
            bytes_read: 0,
        })
    }

    /// Returns the device path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EntropySource for DeviceEntropy {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), EntropyError> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.file.read(&mut buf[filled..]) {
                Ok(0) => {
                    return Err(EntropyError::Exhausted {
                        origin: self.origin.clone(),
                        wanted: buf.len(),
                        got: filled,
                    });
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    return Err(EntropyError::Read {
                        origin: self.origin.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        self.bytes_read += buf.len() as u64;
        Ok(())
    }

    fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    fn origin(&self) -> &str {
        &self.origin
    }
}

impl Drop for DeviceEntropy {
    fn drop(&mut self) {
        tracing::debug!(
            path = %self.origin,
            bytes_read = self.bytes_read,
            "Released entropy device"
        );
    }
}

/// Entropy from the operating system RNG via `getrandom`.
#[derive(Debug, Default)]
pub struct OsEntropy {
    bytes_read: u64,
}

impl OsEntropy {
    /// Creates a source with a zeroed byte count.
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntropySource for OsEntropy {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), EntropyError> {
        OsRng.try_fill_bytes(buf).map_err(|e| EntropyError::Read {
            origin: "os".to_string(),
            reason: e.to_string(),
        })?;
        self.bytes_read += buf.len() as u64;
        Ok(())
    }

    fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    fn origin(&self) -> &str {
        "os"
    }
}
