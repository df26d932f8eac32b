//! ByteSource trait for entropy acquisition.
//!
//! Defines the interface of the collaborator that supplies raw bytes to the
//! generator. Implementations may perform I/O and may return different bytes
//! on every call; the digest, mixing and range logic never touches them
//! directly.

use crate::error::Result;

/// Trait for suppliers of raw entropy-bearing bytes.
///
/// Each call to [`fetch_bytes`](ByteSource::fetch_bytes) must perform a fresh
/// acquisition. The generator rejects an empty payload, so implementations
/// need not check for it themselves.
pub trait ByteSource {
    /// Acquires a fresh byte sequence.
    ///
    /// # Errors
    /// Returns [`Error::SourceUnavailable`](crate::error::Error::SourceUnavailable)
    /// when the bytes cannot be obtained.
    fn fetch_bytes(&mut self) -> Result<Vec<u8>>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn fetch_bytes(&mut self) -> Result<Vec<u8>> {
        (**self).fetch_bytes()
    }
}

impl<S: ByteSource + ?Sized> ByteSource for Box<S> {
    fn fetch_bytes(&mut self) -> Result<Vec<u8>> {
        (**self).fetch_bytes()
    }
}
