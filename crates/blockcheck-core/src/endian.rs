//! Hex rendering and byte-order reversal for header fields.
//!
//! Header fields arrive in display (big-endian) order. The wire format wants
//! every field little-endian, so each field is rendered at its full byte
//! width and then reversed byte by byte.

use crate::error::{HeaderError, HeaderField, HexFault};
use crate::params::U32_FIELD_SIZE;

/// Render a 32-bit field as 8 lowercase hex digits, zero-padded on the left.
///
/// `format!("{:x}")` alone would drop leading zero nibbles and shift every
/// following byte of the header.
pub fn u32_to_hex(value: u32) -> String {
    format!("{:0width$x}", value, width = U32_FIELD_SIZE * 2)
}

/// Reverse the byte order of an even-length hex string.
///
/// The string is read as a sequence of two-digit byte tokens which are
/// emitted in reverse order. Case is preserved.
pub fn reverse_hex(hex_str: &str, field: HeaderField) -> Result<String, HeaderError> {
    check_hex(hex_str, field)?;

    let reversed = hex_str
        .as_bytes()
        .chunks_exact(2)
        .rev()
        .flat_map(|pair| pair.iter().map(|&b| b as char))
        .collect();

    Ok(reversed)
}

/// Decode a hex string that must represent exactly `width` bytes.
pub fn decode_fixed(
    hex_str: &str,
    width: usize,
    field: HeaderField,
) -> Result<Vec<u8>, HeaderError> {
    let mut bytes = vec![0u8; width];

    hex::decode_to_slice(hex_str, &mut bytes).map_err(|err| {
        let reason = match err {
            hex::FromHexError::OddLength => HexFault::OddLength(hex_str.len()),
            hex::FromHexError::InvalidStringLength => HexFault::WrongWidth {
                expected: width,
                actual: hex_str.len() / 2,
            },
            hex::FromHexError::InvalidHexCharacter { c, index } => HexFault::InvalidCharacter {
                character: c,
                index,
            },
        };
        HeaderError::malformed(field, hex_str, reason)
    })?;

    Ok(bytes)
}

/// Reject odd-length strings and non-hex characters.
fn check_hex(hex_str: &str, field: HeaderField) -> Result<(), HeaderError> {
    if let Some((index, character)) = hex_str
        .char_indices()
        .find(|(_, c)| !c.is_ascii_hexdigit())
    {
        return Err(HeaderError::malformed(
            field,
            hex_str,
            HexFault::InvalidCharacter { character, index },
        ));
    }

    if hex_str.len() % 2 != 0 {
        return Err(HeaderError::malformed(
            field,
            hex_str,
            HexFault::OddLength(hex_str.len()),
        ));
    }

    Ok(())
}
