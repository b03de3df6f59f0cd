//! WebAssembly bindings for the block header checker.
//!
//! This crate exposes to JavaScript:
//! - Validating a block header record fetched by the page
//! - Decompressing compact bits into a target

use wasm_bindgen::prelude::*;

pub mod summary;
pub mod verifier;

pub use summary::VerificationSummary;
pub use verifier::{decompress_target_hex, verify_header, verify_record};

/// Initialize the WASM module with better panic messages.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
