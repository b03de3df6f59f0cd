//! SHA256 double-hashing and hash display helpers.

use sha2::{Digest, Sha256};

/// Single SHA256 hash.
#[inline]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let hash = Sha256::digest(data);
    let mut result = [0u8; 32];
    result.copy_from_slice(&hash);
    result
}

/// Bitcoin's double SHA256: SHA256(SHA256(data)).
///
/// This is used for block header hashing.
#[inline]
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    DoubleHash::of(data).second
}

/// Both rounds of a double SHA256, kept for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoubleHash {
    /// SHA256(data).
    pub first: [u8; 32],
    /// SHA256(first), in the byte order the digest emits.
    pub second: [u8; 32],
}

impl DoubleHash {
    /// Hash `data` twice, keeping the intermediate digest.
    pub fn of(data: &[u8]) -> Self {
        let first = sha256(data);
        let second = sha256(&first);
        DoubleHash { first, second }
    }

    /// The block hash in display byte order.
    pub fn display_hex(&self) -> String {
        hash_to_display_hex(&self.second)
    }
}

/// Reverse the byte order of a 32-byte array.
///
/// Bitcoin displays hashes in reverse byte order.
#[inline]
pub fn reverse_bytes(bytes: &[u8; 32]) -> [u8; 32] {
    let mut reversed = *bytes;
    reversed.reverse();
    reversed
}

/// Convert a hash to its display format (reversed hex).
pub fn hash_to_display_hex(hash: &[u8; 32]) -> String {
    hex::encode(reverse_bytes(hash))
}

/// Count leading zero bits in the displayed hash.
///
/// The displayed hash is byte-reversed, so this counts from the end of the
/// internal array.
pub fn count_leading_zeros(hash: &[u8; 32]) -> u32 {
    let mut zeros = 0u32;
    for byte in hash.iter().rev() {
        if *byte == 0 {
            zeros += 8;
        } else {
            zeros += byte.leading_zeros();
            break;
        }
    }
    zeros
}
