//! Digest computation over source bytes.
//!
//! Every invocation computes two independent digests of the same input:
//! a 128-bit MD5 digest and a 256-bit SHA-256 digest. Both are returned as
//! MSB-first byte arrays and are owned by the caller; nothing is cached.

use md5::Md5;
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};
use crate::utils::converter;

/// Length in bytes of the 128-bit digest.
pub const DIGEST128_LEN: usize = 16;

/// Length in bytes of the 256-bit digest.
pub const DIGEST256_LEN: usize = 32;

// Both halves of the long digest are folded against the same short digest.
const _: () = assert!(DIGEST256_LEN == 2 * DIGEST128_LEN);

/// A 128-bit digest, most significant bit first.
pub type Digest128 = [u8; DIGEST128_LEN];

/// A 256-bit digest, most significant bit first.
pub type Digest256 = [u8; DIGEST256_LEN];

/// Selects which byte sequence is fed to the hash primitives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigestInput {
    /// Hash the source bytes as received.
    #[default]
    Raw,
    /// Hash the ASCII `'0'`/`'1'` expansion of the source bytes.
    ///
    /// Reproduces the values of the earlier string-based generator, which
    /// hashed the binary text of the image rather than the image itself.
    BinaryText,
}

/// The pair of digests computed for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digests {
    /// MD5 of the input.
    pub short: Digest128,
    /// SHA-256 of the input.
    pub long: Digest256,
}

impl Digests {
    /// Computes both digests of `bytes` according to `input`.
    ///
    /// # Errors
    /// Returns [`Error::HashFailure`] if a primitive yields a digest of the
    /// wrong length.
    pub fn compute(bytes: &[u8], input: DigestInput) -> Result<Self> {
        match input {
            DigestInput::Raw => Self::of(bytes),
            DigestInput::BinaryText => Self::of(&converter::bytes_to_binary_text(bytes)),
        }
    }

    fn of(bytes: &[u8]) -> Result<Self> {
        let digests = Digests {
            short: hash128(bytes)?,
            long: hash256(bytes)?,
        };
        tracing::debug!(
            input_len = bytes.len(),
            md5 = %hex::encode(digests.short),
            sha256 = %hex::encode(digests.long),
            "computed digests"
        );
        Ok(digests)
    }
}

/// MD5 digest of `bytes`.
///
/// # Errors
/// Returns [`Error::HashFailure`] if the primitive output is not 16 bytes.
pub fn hash128(bytes: &[u8]) -> Result<Digest128> {
    let out = Md5::digest(bytes);
    fixed_len("MD5", out.as_slice())
}

/// SHA-256 digest of `bytes`.
///
/// # Errors
/// Returns [`Error::HashFailure`] if the primitive output is not 32 bytes.
pub fn hash256(bytes: &[u8]) -> Result<Digest256> {
    let out = Sha256::digest(bytes);
    fixed_len("SHA-256", out.as_slice())
}

fn fixed_len<const N: usize>(algorithm: &'static str, out: &[u8]) -> Result<[u8; N]> {
    out.try_into().map_err(|_| Error::HashFailure {
        algorithm,
        expected: N,
        actual: out.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash128_known_vector() {
        let d = hash128(b"The quick brown fox jumps over the lazy dog").unwrap();
        assert_eq!(hex::encode(d), "9e107d9d372bb6826bd81d3542a419d6");
    }

    #[test]
    fn test_hash256_known_vector() {
        let d = hash256(b"The quick brown fox jumps over the lazy dog").unwrap();
        assert_eq!(
            hex::encode(d),
            "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592"
        );
    }

    #[test]
    fn test_digests_render_as_lowercase_hex() {
        let d = Digests::compute(&[], DigestInput::Raw).unwrap();
        assert_eq!(hex::encode(d.short), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(
            hex::encode(d.long),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_compute_raw_matches_primitives() {
        let bytes = b"imgrand";
        let d = Digests::compute(bytes, DigestInput::Raw).unwrap();
        assert_eq!(d.short, hash128(bytes).unwrap());
        assert_eq!(d.long, hash256(bytes).unwrap());
    }

    #[test]
    fn test_compute_binary_text_hashes_expansion() {
        let bytes = [0x00u8];
        let d = Digests::compute(&bytes, DigestInput::BinaryText).unwrap();
        assert_eq!(d.short, hash128(b"00000000").unwrap());
        assert_eq!(d.long, hash256(b"00000000").unwrap());
        assert_ne!(d, Digests::compute(&bytes, DigestInput::Raw).unwrap());
    }

    #[test]
    fn test_fixed_len_rejects_wrong_length() {
        let result: Result<[u8; 16]> = fixed_len("MD5", &[0u8; 15]);
        assert_eq!(
            result,
            Err(Error::HashFailure {
                algorithm: "MD5",
                expected: 16,
                actual: 15,
            })
        );
    }

    #[test]
    fn test_digest_input_default_is_raw() {
        assert_eq!(DigestInput::default(), DigestInput::Raw);
    }
}
