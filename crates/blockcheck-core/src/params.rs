//! Block header layout and consensus constants.

/// Size of a block header in bytes.
pub const BLOCK_HEADER_SIZE: usize = 80;

/// Width of the 32-bit integer fields (version, time, bits, nonce).
pub const U32_FIELD_SIZE: usize = 4;

/// Width of the hash fields (previous block hash, merkle root).
pub const HASH_FIELD_SIZE: usize = 32;

/// Byte offsets of each field inside the canonical header.
pub const VERSION_OFFSET: usize = 0;
pub const PREV_BLOCK_OFFSET: usize = VERSION_OFFSET + U32_FIELD_SIZE;
pub const MERKLE_ROOT_OFFSET: usize = PREV_BLOCK_OFFSET + HASH_FIELD_SIZE;
pub const TIME_OFFSET: usize = MERKLE_ROOT_OFFSET + HASH_FIELD_SIZE;
pub const BITS_OFFSET: usize = TIME_OFFSET + U32_FIELD_SIZE;
pub const NONCE_OFFSET: usize = BITS_OFFSET + U32_FIELD_SIZE;

/// Compact bits of the difficulty-1 target (the genesis block's bits).
pub const DIFFICULTY_ONE_BITS: u32 = 0x1d00ffff;

/// Genesis block field values, used as the reference vector.
pub mod genesis {
    pub const HASH: &str = "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f";
    pub const VERSION: u32 = 1;
    pub const PREV_BLOCK: &str = "0000000000000000000000000000000000000000000000000000000000000000";
    pub const MERKLE_ROOT: &str =
        "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b";
    pub const TIME: u32 = 1231006505;
    pub const BITS: u32 = 0x1d00ffff;
    pub const NONCE: u32 = 2083236893;
}
