//! Bit-level helpers for MSB-first byte sequences.
//!
//! Digests are handled as byte arrays whose bit 0 is the most significant
//! bit of byte 0, matching the standard hex rendering of MD5 and SHA-256.

/// Returns the bit at `index` of an MSB-first byte sequence.
///
/// # Parameters
/// - `bytes`: The byte sequence.
/// - `index`: Bit position, `0` being the most significant bit of `bytes[0]`.
///
/// # Returns
/// `Some(bit)` or `None` if `index` is past the end of the sequence.
pub fn bit_at(bytes: &[u8], index: usize) -> Option<bool> {
    let byte = bytes.get(index / 8)?;
    let shift = 7 - (index % 8);
    Some((byte >> shift) & 1 == 1)
}

/// Bitwise equality of two bytes: each output bit is `1` where the inputs agree.
pub fn xnor_byte(a: u8, b: u8) -> u8 {
    !(a ^ b)
}

/// Writes `xnor_byte(a[i], b[i])` into `out[i]` for every position.
///
/// All three slices must have the same length; the shortest one bounds the
/// number of bytes written.
pub fn xnor_into(out: &mut [u8], a: &[u8], b: &[u8]) {
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        *o = xnor_byte(x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_at_msb_first() {
        let bytes = [0b1000_0001, 0b0100_0000];
        assert_eq!(bit_at(&bytes, 0), Some(true));
        assert_eq!(bit_at(&bytes, 1), Some(false));
        assert_eq!(bit_at(&bytes, 7), Some(true));
        assert_eq!(bit_at(&bytes, 8), Some(false));
        assert_eq!(bit_at(&bytes, 9), Some(true));
    }

    #[test]
    fn test_bit_at_out_of_range() {
        let bytes = [0xFFu8; 2];
        assert_eq!(bit_at(&bytes, 16), None);
        assert_eq!(bit_at(&[], 0), None);
    }

    #[test]
    fn test_xnor_byte_basic() {
        // 0b1100_1010 xnor 0b1010_0110 -> 0b1001_0011
        assert_eq!(xnor_byte(0b1100_1010, 0b1010_0110), 0b1001_0011);
    }

    #[test]
    fn test_xnor_byte_identity() {
        for v in 0..=255u8 {
            assert_eq!(xnor_byte(v, v), 0xFF, "xnor with self failed for {}", v);
            assert_eq!(xnor_byte(v, !v), 0x00, "xnor with complement failed for {}", v);
        }
    }

    #[test]
    fn test_xnor_into_matches_per_byte() {
        let a = [0x00, 0xFF, 0x5A, 0xC3];
        let b = [0xFF, 0xFF, 0xA5, 0xC3];
        let mut out = [0u8; 4];
        xnor_into(&mut out, &a, &b);
        assert_eq!(out, [0x00, 0xFF, 0x00, 0xFF]);
    }

    #[test]
    fn test_xnor_into_shortest_bound() {
        let mut out = [0xAAu8; 3];
        xnor_into(&mut out, &[0x0F], &[0x0F, 0x00]);
        assert_eq!(out, [0xFF, 0xAA, 0xAA]);
    }
}
