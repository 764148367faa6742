//! Browser tests, run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use anndiff_wasm::DifficultyCalculator;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn effective_target_for_min_difficulty() {
    let calculator = DifficultyCalculator::new("mainnet").unwrap();
    assert_eq!(calculator.effective_target(0x207fffff, 0x207fffff, 1).unwrap(), 0x203fffff);
    assert_eq!(calculator.effective_target(0x207fffff, 0x207fffff, 0).unwrap(), 0);
}

#[wasm_bindgen_test]
fn negative_bits_are_errors() {
    let calculator = DifficultyCalculator::new("mainnet").unwrap();
    assert!(calculator.effective_target(0x20ffffff, 0x207fffff, 1).is_err());
    assert!(calculator.aged_ann_target(0xffffffff, 3).is_err());
}

#[wasm_bindgen_test]
fn hash_check() {
    let calculator = DifficultyCalculator::new("mainnet").unwrap();
    let zero = "00".repeat(32);
    assert!(calculator.is_ok(&zero, 0x1d00ffff).unwrap());
    assert!(calculator.is_ok("0000", 0x1d00ffff).is_err());
}

#[wasm_bindgen_test]
fn announcement_aging() {
    let calculator = DifficultyCalculator::new("mainnet").unwrap();
    assert_eq!(calculator.aged_ann_target(0x1d00ffff, 2).unwrap(), 0xffffffff);
    assert_eq!(calculator.aged_ann_target(0x1d00ffff, 3).unwrap(), 0x1d00ffff);
}

#[wasm_bindgen_test]
fn unknown_network() {
    assert!(DifficultyCalculator::new("nowhere").is_err());
}

#[wasm_bindgen_test]
fn hash_check_info() {
    let calculator = DifficultyCalculator::new("mainnet").unwrap();
    assert!(calculator.is_ok_info(&"00".repeat(32), 0x1d00ffff).is_ok());
    assert!(calculator.is_ok_info("00", 0x1d00ffff).is_err());
}
