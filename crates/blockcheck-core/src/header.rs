//! Block header record and its canonical 80-byte serialization.

use serde::{Deserialize, Serialize};

use crate::endian::{decode_fixed, reverse_hex, u32_to_hex};
use crate::error::{HeaderError, HeaderField};
use crate::params::{
    genesis, BITS_OFFSET, BLOCK_HEADER_SIZE, HASH_FIELD_SIZE, MERKLE_ROOT_OFFSET, NONCE_OFFSET,
    PREV_BLOCK_OFFSET, TIME_OFFSET, U32_FIELD_SIZE, VERSION_OFFSET,
};

/// A decoded block header as reported by a block explorer.
///
/// Hash fields are hex strings in display (big-endian) order. Field names on
/// the wire follow the blockchain.info JSON layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderFields {
    /// The block hash published by the data source.
    #[serde(rename = "hash")]
    pub published_hash: String,
    /// Consensus version bits.
    #[serde(rename = "ver")]
    pub version: u32,
    /// Hash of the previous block.
    #[serde(rename = "prev_block")]
    pub previous_block_hash: String,
    /// Merkle root of the block's transactions.
    #[serde(rename = "mrkl_root")]
    pub merkle_root: String,
    /// Block timestamp (Unix time).
    pub time: u32,
    /// Difficulty target in compact "bits" format.
    pub bits: u32,
    /// Nonce for proof of work.
    pub nonce: u32,
}

impl HeaderFields {
    /// The Bitcoin genesis block header.
    pub fn genesis() -> Self {
        HeaderFields {
            published_hash: genesis::HASH.to_string(),
            version: genesis::VERSION,
            previous_block_hash: genesis::PREV_BLOCK.to_string(),
            merkle_root: genesis::MERKLE_ROOT.to_string(),
            time: genesis::TIME,
            bits: genesis::BITS,
            nonce: genesis::NONCE,
        }
    }
}

/// Hex form of every hashed field, in header order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldHex {
    pub version: String,
    pub previous_block_hash: String,
    pub merkle_root: String,
    pub time: String,
    pub bits: String,
    pub nonce: String,
}

impl FieldHex {
    fn from_fields(fields: &HeaderFields) -> Self {
        FieldHex {
            version: u32_to_hex(fields.version),
            previous_block_hash: fields.previous_block_hash.clone(),
            merkle_root: fields.merkle_root.clone(),
            time: u32_to_hex(fields.time),
            bits: u32_to_hex(fields.bits),
            nonce: u32_to_hex(fields.nonce),
        }
    }

    fn to_little_endian(&self) -> Result<Self, HeaderError> {
        Ok(FieldHex {
            version: reverse_hex(&self.version, HeaderField::Version)?,
            previous_block_hash: reverse_hex(
                &self.previous_block_hash,
                HeaderField::PreviousBlockHash,
            )?,
            merkle_root: reverse_hex(&self.merkle_root, HeaderField::MerkleRoot)?,
            time: reverse_hex(&self.time, HeaderField::Time)?,
            bits: reverse_hex(&self.bits, HeaderField::Bits)?,
            nonce: reverse_hex(&self.nonce, HeaderField::Nonce)?,
        })
    }

    /// Each field with its name, offset and width in the serialized header.
    fn layout(&self) -> [(&str, HeaderField, usize, usize); 6] {
        use HeaderField::*;

        [
            (self.version.as_str(), Version, VERSION_OFFSET, U32_FIELD_SIZE),
            (
                self.previous_block_hash.as_str(),
                PreviousBlockHash,
                PREV_BLOCK_OFFSET,
                HASH_FIELD_SIZE,
            ),
            (self.merkle_root.as_str(), MerkleRoot, MERKLE_ROOT_OFFSET, HASH_FIELD_SIZE),
            (self.time.as_str(), Time, TIME_OFFSET, U32_FIELD_SIZE),
            (self.bits.as_str(), Bits, BITS_OFFSET, U32_FIELD_SIZE),
            (self.nonce.as_str(), Nonce, NONCE_OFFSET, U32_FIELD_SIZE),
        ]
    }
}

/// The canonical serialization of a header together with its intermediate forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalHeader {
    /// Fields rendered as fixed-width hex in display order.
    pub hex: FieldHex,
    /// Fields after byte-order reversal.
    pub little_endian: FieldHex,
    /// The 80 bytes that get hashed.
    #[serde(skip)]
    pub bytes: [u8; BLOCK_HEADER_SIZE],
}

impl CanonicalHeader {
    /// The serialized header as lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }
}

/// Build the canonical 80-byte header.
///
/// Layout: version(4) | prev_block(32) | merkle_root(32) | time(4) | bits(4) | nonce(4),
/// every field little-endian. All hashed fields are checked before any bytes
/// are produced. The published hash is not part of the header and is left to
/// [`crate::verify::verify`].
pub fn canonicalize(fields: &HeaderFields) -> Result<CanonicalHeader, HeaderError> {
    // Check hash fields as supplied so errors quote the raw value
    for (value, field) in [
        (&fields.previous_block_hash, HeaderField::PreviousBlockHash),
        (&fields.merkle_root, HeaderField::MerkleRoot),
    ] {
        decode_fixed(value, HASH_FIELD_SIZE, field)?;
    }

    let hex = FieldHex::from_fields(fields);
    let little_endian = hex.to_little_endian()?;

    let mut bytes = [0u8; BLOCK_HEADER_SIZE];
    for (value, field, offset, width) in little_endian.layout() {
        let decoded = decode_fixed(value, width, field)?;
        bytes[offset..offset + width].copy_from_slice(&decoded);
    }

    Ok(CanonicalHeader {
        hex,
        little_endian,
        bytes,
    })
}
