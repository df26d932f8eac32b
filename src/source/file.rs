//! Source that reads a file from disk on every call.

use std::path::{Path, PathBuf};

use super::byte_source::ByteSource;
use crate::error::{Error, Result};

/// Reads the whole file at `path` on each fetch.
///
/// The file is re-read every time, so an image rewritten by another process
/// between calls yields fresh bytes.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }

    /// Returns the backing path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ByteSource for FileSource {
    fn fetch_bytes(&mut self) -> Result<Vec<u8>> {
        let bytes = std::fs::read(&self.path).map_err(|e| {
            Error::SourceUnavailable(format!("{}: {}", self.path.display(), e))
        })?;
        tracing::debug!(path = %self.path.display(), len = bytes.len(), "read file source");
        Ok(bytes)
    }
}
