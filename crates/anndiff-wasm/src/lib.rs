//! WebAssembly bindings for the announcement difficulty rules.
//!
//! This crate provides JavaScript-accessible APIs for:
//! - Computing the effective target of a block
//! - Checking hashes against compact targets
//! - Aging announcements and sanity-checking their minimum difficulty

use wasm_bindgen::prelude::*;

pub mod calculator;
pub mod report;

// Re-export main types for JS access
pub use calculator::DifficultyCalculator;

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
