//! Bit mixer folding the 256-bit digest against the 128-bit digest.
//!
//! The long digest is split into two 128-bit halves. Each half is compared
//! bit by bit with the short digest, and an output bit is `1` exactly when
//! the two compared bits are equal (XNOR). The two folded halves are
//! concatenated, first half first, into a 256-bit sequence.
//!
//! ```text
//! long  = H1 (128 bits) ‖ H2 (128 bits)
//! short = A  (128 bits)
//! out   = xnor(H1, A) ‖ xnor(H2, A)
//! ```

use std::fmt;

use num_bigint::BigUint;

use crate::digest::{Digest128, Digest256, DIGEST128_LEN, DIGEST256_LEN};
use crate::utils::{bits, converter};

/// Number of bits in a mixed sequence.
pub const MIXED_BITS: usize = DIGEST256_LEN * 8;

/// A 256-bit mixed sequence, stored MSB-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MixedBits([u8; DIGEST256_LEN]);

impl MixedBits {
    /// Returns the underlying bytes, most significant first.
    pub fn as_bytes(&self) -> &[u8; DIGEST256_LEN] {
        &self.0
    }

    /// Returns bit `index` (0 is the most significant), or `None` past 255.
    pub fn bit(&self, index: usize) -> Option<bool> {
        bits::bit_at(&self.0, index)
    }

    /// Interprets the sequence as a base-2 unsigned integer, MSB first.
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.0)
    }
}

impl fmt::Display for MixedBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&converter::to_binary_string(&self.0))
    }
}

/// Folds `long` against `short`, half by half.
///
/// Pure and deterministic: identical digests always produce identical output.
pub fn mix(long: &Digest256, short: &Digest128) -> MixedBits {
    let (h1, h2) = long.split_at(DIGEST128_LEN);
    let mut out = [0u8; DIGEST256_LEN];
    let (out1, out2) = out.split_at_mut(DIGEST128_LEN);
    bits::xnor_into(out1, h1, short);
    bits::xnor_into(out2, h2, short);
    MixedBits(out)
}
