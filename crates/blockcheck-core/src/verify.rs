//! The two proof checks on a computed block hash.

use num_bigint::BigUint;
use serde::Serialize;

/// Outcome of checking a header's hash against its published hash and target.
///
/// Both checks are always evaluated; neither short-circuits the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VerificationResult {
    /// The computed display hash equals the published hash.
    pub hash_matches: bool,
    /// The computed display hash, read as a 256-bit integer, is below the target.
    pub below_target: bool,
}

impl VerificationResult {
    /// True when both proofs hold.
    pub fn is_valid(&self) -> bool {
        self.hash_matches && self.below_target
    }
}

/// Compare a computed display hash against the published hash and the target.
///
/// Hash equality ignores hex case. A display hash that does not parse as hex
/// is never below the target.
pub fn verify(display_hash: &str, published_hash: &str, target: &BigUint) -> VerificationResult {
    let hash_matches = display_hash.eq_ignore_ascii_case(published_hash);

    let below_target = BigUint::parse_bytes(display_hash.as_bytes(), 16)
        .map_or(false, |value| &value < target);

    VerificationResult {
        hash_matches,
        below_target,
    }
}
