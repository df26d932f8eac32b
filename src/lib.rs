//! imgrand: pseudo-random integers derived from image bytes.
//!
//! Raw bytes from a changing external source (by default a random cat
//! picture) are hashed with MD5 and SHA-256. The SHA-256 digest is folded
//! half by half against the MD5 digest with a bitwise equality (XNOR) rule,
//! and the resulting 256-bit sequence is read as an unsigned integer,
//! optionally reduced into an inclusive range.
//!
//! This is not a cryptographically secure generator, and bounded results are
//! not uniformly distributed.
//!
//! # Architecture
//!
//! ```text
//! ByteSource  (HTTP image, file, fixed bytes)
//!     ↓ fresh bytes per call
//! Digests     (MD5 128-bit, SHA-256 256-bit)
//!     ↓
//! mix         (xnor(H1, MD5) ‖ xnor(H2, MD5) → 256 bits)
//!     ↓
//! Range       (unbounded, or modulo-and-retry into [min, max])
//! ```
//!
//! # Examples
//!
//! Derive a die roll from known bytes:
//!
//! ```
//! use imgrand::{derive, DigestInput, Range};
//!
//! let range = Range::bounded(1u32, 6u32).unwrap();
//! let roll = derive(b"image bytes", DigestInput::Raw, &range).unwrap();
//! assert!(range.contains(&roll.value));
//! ```
//!
//! Generate from a source, rejecting an inverted range before any fetch:
//!
//! ```
//! use imgrand::source::fixed::FixedSource;
//! use imgrand::{generate, Error};
//!
//! let value = generate(FixedSource::new(vec![0xFF; 64]), None, Some(9u32.into())).unwrap();
//! assert!(value <= num_bigint::BigUint::from(9u32));
//!
//! let err = generate(FixedSource::new(vec![1]), Some(5u32.into()), Some(1u32.into()));
//! assert!(matches!(err, Err(Error::InvalidRange { .. })));
//! ```

#![deny(clippy::all)]

pub mod config;
pub mod digest;
pub mod error;
pub mod generator;
pub mod mixer;
pub mod range;
pub mod source;
pub mod utils;

pub use config::{Config, SourceConfig};
pub use digest::{DigestInput, Digests};
pub use error::Error;
pub use generator::{derive, generate, Derivation, ImageRandom};
pub use mixer::{mix, MixedBits};
pub use range::Range;
