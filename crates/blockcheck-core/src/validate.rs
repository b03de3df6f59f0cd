//! Header validation pipeline: canonicalize, hash, verify.

use num_bigint::BigUint;
use serde::Serialize;
use tracing::debug;

use crate::difficulty::{bits_to_difficulty, decompress_target, target_to_hex};
use crate::error::HeaderError;
use crate::hash::{count_leading_zeros, DoubleHash};
use crate::header::{canonicalize, CanonicalHeader, HeaderFields};
use crate::verify::{verify, VerificationResult};

/// Everything computed while validating one header.
#[derive(Debug, Clone, Serialize)]
pub struct HeaderReport {
    /// The header record that was validated.
    pub fields: HeaderFields,
    /// Hex forms of each field before and after byte reversal.
    pub canonical: CanonicalHeader,
    /// The serialized 80-byte header as hex.
    pub header_hex: String,
    /// Both digest rounds.
    #[serde(skip)]
    pub digests: DoubleHash,
    /// SHA256 of the header, as hex.
    pub first_hash: String,
    /// SHA256 of the first hash, as hex in digest byte order.
    pub second_hash: String,
    /// The block hash in display byte order.
    pub display_hash: String,
    /// Leading zero bits of the display hash.
    pub leading_zero_bits: u32,
    /// Target decompressed from the header's bits.
    #[serde(skip)]
    pub target: BigUint,
    pub target_hex: String,
    pub target_decimal: String,
    /// Difficulty relative to the difficulty-1 target.
    pub difficulty: f64,
    pub result: VerificationResult,
}

impl HeaderReport {
    /// True when both proofs hold.
    pub fn is_valid(&self) -> bool {
        self.result.is_valid()
    }
}

/// Validate a single header.
///
/// Malformed fields abort before anything is hashed. Failed proofs are
/// reported through [`HeaderReport::result`], not as errors.
pub fn validate_header(fields: &HeaderFields) -> Result<HeaderReport, HeaderError> {
    let canonical = canonicalize(fields)?;
    let header_hex = canonical.to_hex();
    debug!(header = %header_hex, "canonicalized header");

    let digests = DoubleHash::of(&canonical.bytes);
    let display_hash = digests.display_hex();
    debug!(
        first = %hex::encode(digests.first),
        second = %hex::encode(digests.second),
        display = %display_hash,
        "hashed header"
    );

    let target = decompress_target(fields.bits);
    let target_hex = target_to_hex(&target);
    debug!(bits = %format!("{:#010x}", fields.bits), target = %target_hex, "decompressed target");

    let result = verify(&display_hash, &fields.published_hash, &target);
    debug!(
        hash_matches = result.hash_matches,
        below_target = result.below_target,
        "verified header"
    );

    Ok(HeaderReport {
        fields: fields.clone(),
        header_hex,
        first_hash: hex::encode(digests.first),
        second_hash: hex::encode(digests.second),
        leading_zero_bits: count_leading_zeros(&digests.second),
        display_hash,
        digests,
        target_decimal: target.to_string(),
        target_hex,
        target,
        difficulty: bits_to_difficulty(fields.bits),
        canonical,
        result,
    })
}
