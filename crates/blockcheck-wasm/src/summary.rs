//! Validation results shaped for JavaScript.

use blockcheck_core::difficulty::format_difficulty;
use blockcheck_core::HeaderReport;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Result of validating one header, as handed to JS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationSummary {
    /// Hash published by the data source.
    pub published_hash: String,
    /// Hash computed from the header (display format).
    pub computed_hash: String,
    /// The computed hash equals the published one.
    pub hash_matches: bool,
    /// The computed hash is below the target.
    pub below_target: bool,
    /// Both checks passed.
    pub valid: bool,
    /// Serialized 80-byte header.
    pub header_hex: String,
    /// SHA256 of the header.
    pub first_hash: String,
    /// SHA256 of the first hash.
    pub second_hash: String,
    /// Target decompressed from bits.
    pub target_hex: String,
    /// Difficulty as a number.
    pub difficulty: f64,
    /// Formatted difficulty string.
    pub difficulty_display: String,
}

impl VerificationSummary {
    pub fn from_report(report: &HeaderReport) -> Self {
        VerificationSummary {
            published_hash: report.fields.published_hash.clone(),
            computed_hash: report.display_hash.clone(),
            hash_matches: report.result.hash_matches,
            below_target: report.result.below_target,
            valid: report.is_valid(),
            header_hex: report.header_hex.clone(),
            first_hash: report.first_hash.clone(),
            second_hash: report.second_hash.clone(),
            target_hex: report.target_hex.clone(),
            difficulty: report.difficulty,
            difficulty_display: format_difficulty(report.difficulty),
        }
    }

    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }
}
