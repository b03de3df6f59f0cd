//! Bitcoin block header integrity checking.
//!
//! This crate provides pure Rust implementations of:
//! - Canonical 80-byte block header serialization from explorer field values
//! - SHA256 double-hashing with display byte order
//! - Compact "bits" target decompression and difficulty
//! - The two proof checks: published hash equality and hash below target
//!
//! Nothing here performs I/O; every call is independent and reentrant.

pub mod difficulty;
pub mod endian;
pub mod error;
pub mod hash;
pub mod header;
pub mod params;
pub mod validate;
pub mod verify;

pub use difficulty::{bits_to_difficulty, decompress_target, target_to_hex};
pub use error::{HeaderError, HeaderField, HexFault};
pub use hash::{double_sha256, hash_to_display_hex, DoubleHash};
pub use header::{canonicalize, CanonicalHeader, FieldHex, HeaderFields};
pub use validate::{validate_header, HeaderReport};
pub use verify::{verify, VerificationResult};
