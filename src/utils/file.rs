//! # File Access
//!
//! Secret files are read through the [`FileSystem`] trait. [`LocalFs`] is the
//! real implementation; tests substitute their own to observe or fail reads.

use std::io;
use std::path::Path;

use async_trait::async_trait;
use tracing::trace;

/// Reads whole files as text, in both async and blocking flavors.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD rather than rejected.
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Reads the file at `path` without blocking the executor.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`io::Error`] when the file does not exist or
    /// cannot be read.
    async fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Reads the file at `path` on the calling thread.
    ///
    /// # Errors
    ///
    /// Same conditions as [`FileSystem::read_to_string`].
    fn read_to_string_blocking(&self, path: &Path) -> io::Result<String>;
}

/// The local file system, via `tokio::fs` and `std::fs`.
///
/// The async read goes through `tokio::fs`, so it must be polled inside a
/// Tokio runtime.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

#[async_trait]
impl FileSystem for LocalFs {
    async fn read_to_string(&self, path: &Path) -> io::Result<String> {
        trace!(path = %path.display(), "Reading secret file");
        let bytes = tokio::fs::read(path).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn read_to_string_blocking(&self, path: &Path) -> io::Result<String> {
        trace!(path = %path.display(), "Reading secret file (blocking)");
        let bytes = std::fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
