//! Network definitions and difficulty parameters.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::compact::CompactTarget;
use crate::error::DifficultyError;

/// Blocks an announcement must wait before it can be used.
pub const ANN_WAIT_PERIOD: u32 = 3;

/// Upper bound on the compact bits of a minimum announcement difficulty,
/// one exponent step above the minimum difficulty ceiling.
pub const ANN_MIN_DIFF_LIMIT: u32 = 0x20ff_ffff;

/// Protocol parameters consumed by the difficulty rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyParams {
    /// Minimum age in blocks before an announcement is usable.
    pub ann_wait_period: u32,
    /// Easiest target a block may be held to.
    pub min_difficulty: CompactTarget,
    /// Largest compact bits accepted as a minimum announcement difficulty.
    pub ann_min_diff_limit: u32,
}

impl DifficultyParams {
    /// Parameters of the PKT network.
    pub const fn pkt() -> Self {
        DifficultyParams {
            ann_wait_period: ANN_WAIT_PERIOD,
            min_difficulty: CompactTarget::MIN_DIFFICULTY,
            ann_min_diff_limit: ANN_MIN_DIFF_LIMIT,
        }
    }

    /// Load parameters from JSON. Omitted fields take the mainnet values.
    pub fn from_json(json: &str) -> Result<Self, DifficultyError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for DifficultyParams {
    fn default() -> Self {
        DifficultyParams::pkt()
    }
}

/// Network type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Network {
    /// PKT mainnet
    #[default]
    Mainnet,
    /// PKT testnet, which shares the mainnet difficulty parameters
    Testnet,
}

impl Network {
    /// Difficulty parameters for this network.
    pub fn params(&self) -> DifficultyParams {
        match self {
            Network::Mainnet | Network::Testnet => DifficultyParams::pkt(),
        }
    }

    /// Get network name as string.
    pub fn name(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }
}

impl FromStr for Network {
    type Err = DifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" | "main" | "pkt" => Ok(Network::Mainnet),
            "testnet" | "test" => Ok(Network::Testnet),
            _ => Err(DifficultyError::UnknownNetwork(s.to_string())),
        }
    }
}

impl core::fmt::Display for Network {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}
