//! Conversion between byte sequences and their binary text rendering.
//!
//! Binary text is the ASCII `'0'`/`'1'` expansion of a byte sequence,
//! eight characters per byte, most significant bit first.

/// Expands a byte slice into binary text bytes.
///
/// # Parameters
/// - `input`: Bytes to expand.
///
/// # Returns
/// A `Vec<u8>` of `input.len() * 8` ASCII digits.
pub fn bytes_to_binary_text(input: &[u8]) -> Vec<u8> {
    let mut output = Vec::with_capacity(input.len() * 8);
    for &byte in input {
        for shift in (0..8).rev() {
            output.push(if (byte >> shift) & 1 == 1 { b'1' } else { b'0' });
        }
    }
    output
}

/// Renders a byte slice as a binary `String`.
pub fn to_binary_string(input: &[u8]) -> String {
    let mut s = String::with_capacity(input.len() * 8);
    for &byte in input {
        s.push_str(&format!("{:08b}", byte));
    }
    s
}
