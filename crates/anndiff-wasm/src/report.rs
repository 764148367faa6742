//! Serializable results handed back to JavaScript.

use anndiff_core::hash::{hash_to_display_hex, is_ok, HASH_SIZE};
use anndiff_core::{AgedTarget, EffectiveTarget};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Zero-padded big-endian hex of a target magnitude.
fn target_hex(target: &anndiff_core::CompactTarget) -> String {
    let bytes = target.to_big().to_bytes_be();
    let width = (HASH_SIZE * 2).max(bytes.len() * 2);
    format!("{:0>width$}", hex::encode(bytes), width = width)
}

/// Effective target of a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveTargetInfo {
    /// Compact bits as committed on the wire.
    pub bits: u32,
    /// Target as big-endian hex, absent when no hash can satisfy it.
    pub target: Option<String>,
    /// Whether any hash can satisfy the target.
    pub satisfiable: bool,
}

impl EffectiveTargetInfo {
    pub fn new(effective: &EffectiveTarget) -> Self {
        let target = effective.target();
        EffectiveTargetInfo {
            bits: effective.bits(),
            target: target.as_ref().map(target_hex),
            satisfiable: target.is_some(),
        }
    }

    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }
}

/// Target an announcement is valued at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgedTargetInfo {
    /// Compact bits, 0xffffffff when unusable.
    pub bits: u32,
    /// Aged target as big-endian hex, absent when unusable.
    pub target: Option<String>,
    /// Whether the announcement may be added to a block.
    pub usable: bool,
}

impl AgedTargetInfo {
    pub fn new(aged: &AgedTarget) -> Self {
        AgedTargetInfo {
            bits: aged.bits(),
            target: aged.target().as_ref().map(target_hex),
            usable: aged.is_usable(),
        }
    }

    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }
}

/// Result of checking a hash against a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashCheckInfo {
    /// Hash in display format (reversed hex).
    pub hash: String,
    /// Compact target bits checked against.
    pub target_bits: u32,
    /// Whether the hash satisfies the target.
    pub ok: bool,
}

impl HashCheckInfo {
    pub fn new(hash: &[u8; 32], target_bits: u32) -> Self {
        HashCheckInfo {
            hash: hash_to_display_hex(hash),
            target_bits,
            ok: is_ok(hash, target_bits),
        }
    }

    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }
}
