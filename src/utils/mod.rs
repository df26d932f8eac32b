//! Bit and byte helpers shared by the digest, mixer and CLI layers.

pub mod bits;
pub mod converter;
