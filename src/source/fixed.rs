//! Source that replays the same bytes on every call.

use super::byte_source::ByteSource;
use crate::error::Result;

/// Returns a copy of the same byte sequence on every fetch.
///
/// Useful to replay a previously captured image or to derive values from
/// known input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSource {
    bytes: Vec<u8>,
}

impl FixedSource {
    /// Creates a source that always yields `bytes`.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        FixedSource {
            bytes: bytes.into(),
        }
    }
}

impl ByteSource for FixedSource {
    fn fetch_bytes(&mut self) -> Result<Vec<u8>> {
        Ok(self.bytes.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_source_repeats() {
        let mut source = FixedSource::new(b"abc".to_vec());
        assert_eq!(source.fetch_bytes().unwrap(), b"abc");
        assert_eq!(source.fetch_bytes().unwrap(), b"abc");
    }

    #[test]
    fn test_fixed_source_through_box() {
        let mut source: Box<dyn ByteSource> = Box::new(FixedSource::new(vec![1, 2, 3]));
        assert_eq!(source.fetch_bytes().unwrap(), vec![1, 2, 3]);
    }
}
