//! Error type for boundary validation.
//!
//! The consensus operations themselves are total over their input domain;
//! errors only arise when raw values are turned into trusted inputs.

use thiserror::Error;

/// Errors raised while validating inputs at the library boundary.
#[derive(Debug, Error)]
pub enum DifficultyError {
    /// The compact value has its sign flag set over a non-zero magnitude.
    #[error("compact target {0:#010x} encodes a negative value")]
    NegativeTarget(u32),

    /// A proof-of-work hash must supply at least 32 bytes.
    #[error("hash must be at least 32 bytes, got {0}")]
    HashTooShort(usize),

    /// Network name not recognized.
    #[error("unknown network: {0}")]
    UnknownNetwork(String),

    /// Difficulty parameters could not be parsed.
    #[error("invalid difficulty parameters: {0}")]
    Config(#[from] serde_json::Error),
}
