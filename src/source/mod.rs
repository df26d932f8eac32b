//! Byte acquisition subsystem.
//!
//! Provides the [`ByteSource`](byte_source::ByteSource) abstraction and its
//! implementations. The generator receives a source by injection, so the
//! digest, mixing and range logic stays pure and testable offline.

pub mod byte_source;
pub mod file;
pub mod fixed;
pub mod http;
