//! Known mainnet header vectors run through the full pipeline.

use blockcheck_core::{
    canonicalize, validate_header, HeaderError, HeaderField, HeaderFields, HexFault,
};
use hex_literal::hex;

fn block_100000() -> HeaderFields {
    HeaderFields {
        published_hash: "000000000003ba27aa200b1cecaad478d2b00432346c3f1f3986da1afd33e506".into(),
        version: 1,
        previous_block_hash:
            "000000000002d01c1fccc21636b607dfd930d31d01c3a62104612a1719011250".into(),
        merkle_root: "f3e94742aca4b5ef85488dc37c06c3282295ffec960994b2c0d5ac2a25a95766".into(),
        time: 1293623863,
        bits: 453281356,
        nonce: 274148111,
    }
}

fn block_125552() -> HeaderFields {
    HeaderFields {
        published_hash: "00000000000000001e8d6829a8a21adc5d38d0a473b144b6765798e61f98bd1d".into(),
        version: 1,
        previous_block_hash:
            "00000000000008a3a41b85b8b29ad444def299fee21793cd8b9e567eab02cd81".into(),
        merkle_root: "2b12fcf1b09288fcaff797d71e950e71ae42b91e8bdb2304758dfcffc2b620e3".into(),
        time: 1305998791,
        bits: 440711666,
        nonce: 2504433986,
    }
}

#[test]
fn genesis_block_validates() {
    let report = validate_header(&HeaderFields::genesis()).unwrap();

    assert_eq!(
        report.display_hash,
        "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f"
    );
    assert!(report.result.hash_matches);
    assert!(report.result.below_target);
    assert!(report.is_valid());
}

#[test]
fn block_100000_validates() {
    let report = validate_header(&block_100000()).unwrap();

    assert_eq!(
        report.canonical.bytes,
        hex!(
            "01000000"
            "50120119172a610421a6c3011dd330d9df07b63616c2cc1f1cd0020000000000"
            "6657a9252aacd5c0b2940996ecff952228c3067cc38d4885efb5a4ac4247e9f3"
            "37221b4d"
            "4c86041b"
            "0f2b5710"
        )
    );
    assert_eq!(
        report.target_hex,
        "000000000004864c000000000000000000000000000000000000000000000000"
    );
    assert!(report.is_valid());
}

#[test]
fn block_125552_validates() {
    let report = validate_header(&block_125552()).unwrap();

    assert_eq!(
        report.digests.second,
        hex!("1dbd981fe6985776b644b173a4d0385ddc1aa2a829688d1e0000000000000000")
    );
    assert_eq!(
        report.display_hash,
        "00000000000000001e8d6829a8a21adc5d38d0a473b144b6765798e61f98bd1d"
    );
    assert!(report.is_valid());
}

#[test]
fn uppercase_published_hash_matches() {
    let mut fields = block_125552();
    fields.published_hash = fields.published_hash.to_uppercase();

    let report = validate_header(&fields).unwrap();
    assert!(report.result.hash_matches);
}

#[test]
fn pipeline_is_deterministic() {
    let fields = block_100000();
    let a = validate_header(&fields).unwrap();
    let b = validate_header(&fields).unwrap();

    assert_eq!(a.canonical, b.canonical);
    assert_eq!(a.digests, b.digests);
    assert_eq!(a.display_hash, b.display_hash);
    assert_eq!(a.target, b.target);
    assert_eq!(a.result, b.result);
}

#[test]
fn altered_published_hash_fails_only_the_match() {
    let mut fields = HeaderFields::genesis();
    // Last digit 'f' -> 'e'
    fields.published_hash.pop();
    fields.published_hash.push('e');

    let report = validate_header(&fields).unwrap();
    assert!(!report.result.hash_matches);
    assert!(report.result.below_target);
    assert!(!report.is_valid());
}

#[test]
fn non_hex_published_hash_is_a_mismatch() {
    let mut fields = HeaderFields::genesis();
    fields.published_hash.pop();
    fields.published_hash.push('g');

    let report = validate_header(&fields).unwrap();
    assert!(!report.result.hash_matches);
    assert!(report.result.below_target);
    assert!(!report.is_valid());
}

#[test]
fn short_published_hash_is_a_mismatch() {
    let mut fields = HeaderFields::genesis();
    fields.published_hash.pop();

    let report = validate_header(&fields).unwrap();
    assert!(!report.result.hash_matches);
    assert!(report.result.below_target);
}

#[test]
fn altered_nonce_fails_both_proofs() {
    let mut fields = HeaderFields::genesis();
    fields.nonce += 1;

    let report = validate_header(&fields).unwrap();
    assert_eq!(
        report.display_hash,
        "9b227a4a5daa0cbae6874144bc5d7797d0513e320aceadeb3b06304971a41b1c"
    );
    assert!(!report.result.hash_matches);
    assert!(!report.result.below_target);
}

#[test]
fn odd_length_previous_hash_is_rejected() {
    let mut fields = HeaderFields::genesis();
    fields.previous_block_hash.pop();

    let err = validate_header(&fields).unwrap_err();
    assert_eq!(
        err,
        HeaderError::MalformedField {
            field: HeaderField::PreviousBlockHash,
            value: "0".repeat(63),
            reason: HexFault::OddLength(63),
        }
    );
}

#[test]
fn non_hex_previous_hash_is_rejected() {
    let mut fields = HeaderFields::genesis();
    fields.previous_block_hash.replace_range(0..1, "x");

    let err = canonicalize(&fields).unwrap_err();
    match err {
        HeaderError::MalformedField { field, reason, .. } => {
            assert_eq!(field, HeaderField::PreviousBlockHash);
            assert_eq!(
                reason,
                HexFault::InvalidCharacter {
                    character: 'x',
                    index: 0
                }
            );
        }
    }
}
