//! Compact "bits" target decompression and difficulty.

use num_bigint::BigUint;

use crate::params::DIFFICULTY_ONE_BITS;

/// Convert compact "bits" to the full-precision target.
///
/// The bits format is: [exponent (1 byte)][mantissa (3 bytes)]
/// Target = mantissa * 256^(exponent - 3)
///
/// For exponents below 3 only the high-order mantissa bytes survive, so the
/// mantissa is shifted right instead. The mantissa is read as a plain
/// unsigned 24-bit value.
pub fn decompress_target(bits: u32) -> BigUint {
    let exponent = bits >> 24;
    let mantissa = bits & 0x00ff_ffff;

    if exponent <= 3 {
        BigUint::from(mantissa >> (8 * (3 - exponent)))
    } else {
        BigUint::from(mantissa) << (8 * (exponent - 3) as usize)
    }
}

/// Render a target as 64 zero-padded lowercase hex digits.
///
/// Targets wider than 256 bits are rendered in full.
pub fn target_to_hex(target: &BigUint) -> String {
    format!("{:064x}", target)
}

/// Calculate approximate difficulty from bits.
///
/// Difficulty = max_target / current_target, where max_target is the
/// difficulty-1 target (bits = 0x1d00ffff).
pub fn bits_to_difficulty(bits: u32) -> f64 {
    let current = target_to_f64(&decompress_target(bits));
    let difficulty_one = target_to_f64(&decompress_target(DIFFICULTY_ONE_BITS));

    if current == 0.0 {
        return f64::INFINITY;
    }

    difficulty_one / current
}

/// Convert a target to an approximate f64 value.
fn target_to_f64(target: &BigUint) -> f64 {
    let bytes = target.to_bytes_be();

    // Take up to 8 bytes for precision
    let head = bytes.len().min(8);
    let value = bytes[..head]
        .iter()
        .fold(0u64, |acc, &b| (acc << 8) | b as u64);

    let remaining = (bytes.len() - head) as i32;
    (value as f64) * 2f64.powi(8 * remaining)
}

/// Format difficulty for display (e.g., "1.23T" for trillion).
pub fn format_difficulty(difficulty: f64) -> String {
    if difficulty >= 1e15 {
        format!("{:.2}P", difficulty / 1e15)
    } else if difficulty >= 1e12 {
        format!("{:.2}T", difficulty / 1e12)
    } else if difficulty >= 1e9 {
        format!("{:.2}G", difficulty / 1e9)
    } else if difficulty >= 1e6 {
        format!("{:.2}M", difficulty / 1e6)
    } else if difficulty >= 1e3 {
        format!("{:.2}K", difficulty / 1e3)
    } else {
        format!("{:.2}", difficulty)
    }
}
