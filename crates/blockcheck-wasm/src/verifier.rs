//! JS entry points for header validation.

use blockcheck_core::{decompress_target, target_to_hex, validate_header, HeaderFields};
use wasm_bindgen::prelude::*;

use crate::summary::VerificationSummary;

/// Validate a header record object (blockchain.info field names).
///
/// Returns a summary object. A header that fails its proofs still resolves
/// with `valid: false`; only malformed input is thrown.
#[wasm_bindgen(js_name = verifyHeader)]
pub fn verify_header(record: JsValue) -> Result<JsValue, JsValue> {
    let fields: HeaderFields = serde_wasm_bindgen::from_value(record)
        .map_err(|e| JsValue::from_str(&format!("Invalid header record: {}", e)))?;

    verify_record(&fields)
        .map_err(|e| JsValue::from_str(&e))?
        .to_js()
}

/// Validate an already decoded header.
pub fn verify_record(fields: &HeaderFields) -> Result<VerificationSummary, String> {
    validate_header(fields)
        .map(|report| VerificationSummary::from_report(&report))
        .map_err(|e| e.to_string())
}

/// Decompress compact bits into a 64-digit hex target.
#[wasm_bindgen(js_name = decompressTarget)]
pub fn decompress_target_hex(bits: u32) -> String {
    target_to_hex(&decompress_target(bits))
}
