//! Difficulty calculator exposed to JavaScript.

use anndiff_core::hash::HASH_SIZE;
use anndiff_core::{Difficulty, DifficultyError, DifficultyParams, Network};
use wasm_bindgen::prelude::*;

use crate::report::{AgedTargetInfo, EffectiveTargetInfo, HashCheckInfo};

fn to_js_error(e: DifficultyError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Decode a hash given as hex in internal byte order.
pub fn parse_hash_hex(hash_hex: &str) -> Result<Vec<u8>, String> {
    hex::decode(hash_hex).map_err(|e| format!("Invalid hash hex: {}", e))
}

/// First 32 bytes of a decoded hash.
pub fn hash_head(hash: &[u8]) -> Result<[u8; HASH_SIZE], DifficultyError> {
    hash.get(..HASH_SIZE)
        .and_then(|head| head.try_into().ok())
        .ok_or(DifficultyError::HashTooShort(hash.len()))
}

/// Difficulty rules for one network.
#[wasm_bindgen]
pub struct DifficultyCalculator {
    /// Network name, or "custom" for caller-supplied parameters.
    network: String,
    /// The rules being applied.
    difficulty: Difficulty,
}

#[wasm_bindgen]
impl DifficultyCalculator {
    /// Create a calculator for the specified network ("mainnet" or "testnet").
    #[wasm_bindgen(constructor)]
    pub fn new(network: &str) -> Result<DifficultyCalculator, JsValue> {
        let net: Network = network.parse().map_err(to_js_error)?;

        Ok(DifficultyCalculator {
            network: net.name().to_string(),
            difficulty: Difficulty::for_network(net),
        })
    }

    /// Create a calculator from a parameter object. Omitted fields take the
    /// mainnet values.
    #[wasm_bindgen]
    pub fn with_params(params: JsValue) -> Result<DifficultyCalculator, JsValue> {
        let params: DifficultyParams = serde_wasm_bindgen::from_value(params)
            .map_err(|e| JsValue::from_str(&format!("Invalid parameters: {:?}", e)))?;
        console_log(&format!("custom difficulty parameters: {:?}", params));

        Ok(DifficultyCalculator {
            network: "custom".to_string(),
            difficulty: Difficulty::new(params),
        })
    }

    /// Effective target bits for a block.
    ///
    /// # Arguments
    /// * `header_bits` - Compact target from the block header
    /// * `min_ann_bits` - Minimum announcement target committed by the miner
    /// * `ann_count` - Number of announcements the block was mined with
    #[wasm_bindgen]
    pub fn effective_target(&self, header_bits: u32, min_ann_bits: u32, ann_count: u64) -> Result<u32, JsValue> {
        self.difficulty
            .effective_target_bits(header_bits, min_ann_bits, ann_count)
            .map(|effective| effective.bits())
            .map_err(to_js_error)
    }

    /// Effective target with its expanded form.
    #[wasm_bindgen]
    pub fn effective_target_info(&self, header_bits: u32, min_ann_bits: u32, ann_count: u64) -> Result<JsValue, JsValue> {
        let effective = self
            .difficulty
            .effective_target_bits(header_bits, min_ann_bits, ann_count)
            .map_err(to_js_error)?;
        EffectiveTargetInfo::new(&effective).to_js()
    }

    /// Check a hash (hex, internal byte order) against compact target bits.
    #[wasm_bindgen]
    pub fn is_ok(&self, hash_hex: &str, target_bits: u32) -> Result<bool, JsValue> {
        let hash = parse_hash_hex(hash_hex).map_err(|e| JsValue::from_str(&e))?;
        self.difficulty.is_ok_slice(&hash, target_bits).map_err(to_js_error)
    }

    /// Check a hash and report it in display format alongside the verdict.
    #[wasm_bindgen]
    pub fn is_ok_info(&self, hash_hex: &str, target_bits: u32) -> Result<JsValue, JsValue> {
        let hash = parse_hash_hex(hash_hex).map_err(|e| JsValue::from_str(&e))?;
        let head = hash_head(&hash).map_err(to_js_error)?;
        HashCheckInfo::new(&head, target_bits).to_js()
    }

    /// Aged announcement target bits, 0xffffffff when the announcement is unusable.
    #[wasm_bindgen]
    pub fn aged_ann_target(&self, bits: u32, ann_age_blocks: u32) -> Result<u32, JsValue> {
        self.difficulty
            .aged_ann_target_bits(bits, ann_age_blocks)
            .map(|aged| aged.bits())
            .map_err(to_js_error)
    }

    /// Aged announcement target with its expanded form.
    #[wasm_bindgen]
    pub fn aged_ann_target_info(&self, bits: u32, ann_age_blocks: u32) -> Result<JsValue, JsValue> {
        let aged = self
            .difficulty
            .aged_ann_target_bits(bits, ann_age_blocks)
            .map_err(to_js_error)?;
        AgedTargetInfo::new(&aged).to_js()
    }

    /// Whether a minimum announcement difficulty is sane.
    #[wasm_bindgen]
    pub fn is_ann_min_diff_ok(&self, bits: u32) -> bool {
        self.difficulty.is_ann_min_diff_ok(bits)
    }

    /// Get the parameters in use.
    #[wasm_bindgen(getter)]
    pub fn params(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.difficulty.params())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }

    /// Get the network name.
    #[wasm_bindgen(getter)]
    pub fn network(&self) -> String {
        self.network.clone()
    }
}

/// Log to the browser console.
#[wasm_bindgen]
pub fn console_log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}
