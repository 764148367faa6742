//! Difficulty rules bound to a parameter set.

use crate::aging::{aged_ann_target, AgedTarget};
use crate::compact::CompactTarget;
use crate::effective::{effective_target, EffectiveTarget};
use crate::error::DifficultyError;
use crate::hash::{is_ok, is_ok_slice};
use crate::network::{DifficultyParams, Network};
use crate::sanity::is_ann_min_diff_ok;

/// Difficulty rules for one network.
///
/// Stateless apart from its parameters; share freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Difficulty {
    params: DifficultyParams,
}

impl Difficulty {
    pub fn new(params: DifficultyParams) -> Self {
        Difficulty { params }
    }

    pub fn for_network(network: Network) -> Self {
        Difficulty::new(network.params())
    }

    pub fn params(&self) -> &DifficultyParams {
        &self.params
    }

    /// Effective target a block hash must satisfy.
    pub fn effective_target(
        &self,
        header_target: CompactTarget,
        min_ann_target: CompactTarget,
        ann_count: u64,
    ) -> EffectiveTarget {
        effective_target(&self.params, header_target, min_ann_target, ann_count)
    }

    /// [`Self::effective_target`] over raw compact bits, rejecting negative
    /// encodings.
    pub fn effective_target_bits(
        &self,
        header_bits: u32,
        min_ann_bits: u32,
        ann_count: u64,
    ) -> Result<EffectiveTarget, DifficultyError> {
        let header_target = CompactTarget::new(header_bits)?;
        let min_ann_target = CompactTarget::new(min_ann_bits)?;
        Ok(self.effective_target(header_target, min_ann_target, ann_count))
    }

    /// Check a little-endian hash against compact target bits.
    pub fn is_ok(&self, hash: &[u8; 32], target_bits: u32) -> bool {
        is_ok(hash, target_bits)
    }

    /// Check the first 32 bytes of a hash; shorter input is an error.
    pub fn is_ok_slice(&self, hash: &[u8], target_bits: u32) -> Result<bool, DifficultyError> {
        is_ok_slice(hash, target_bits)
    }

    /// Target to value an announcement at, given its age in blocks.
    pub fn aged_ann_target(&self, target: CompactTarget, ann_age_blocks: u32) -> AgedTarget {
        aged_ann_target(&self.params, target, ann_age_blocks)
    }

    /// [`Self::aged_ann_target`] over raw compact bits.
    pub fn aged_ann_target_bits(&self, bits: u32, ann_age_blocks: u32) -> Result<AgedTarget, DifficultyError> {
        Ok(self.aged_ann_target(CompactTarget::new(bits)?, ann_age_blocks))
    }

    /// Whether a miner-supplied minimum announcement difficulty is sane.
    pub fn is_ann_min_diff_ok(&self, bits: u32) -> bool {
        is_ann_min_diff_ok(&self.params, bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_network() {
        let difficulty = Difficulty::for_network(Network::Mainnet);
        assert_eq!(difficulty.params(), &DifficultyParams::pkt());
        assert_eq!(difficulty, Difficulty::default());
    }

    #[test]
    fn test_block_flow() {
        let difficulty = Difficulty::default();

        // Miner commits a sane minimum announcement target
        assert!(difficulty.is_ann_min_diff_ok(0x207fffff));

        let effective = difficulty.effective_target_bits(0x207fffff, 0x207fffff, 1).unwrap();
        assert_eq!(effective.bits(), 0x203fffff);

        // Target is 0x3fffff * 2^232; hashes are compared from their last byte
        let mut hash = [0u8; 32];
        hash[31] = 0x40;
        assert!(!difficulty.is_ok(&hash, effective.bits()));
        hash[31] = 0x3f;
        assert!(difficulty.is_ok(&hash, effective.bits()));
        assert!(effective.is_satisfied_by(&hash));
    }

    #[test]
    fn test_raw_bits_rejected_at_boundary() {
        let difficulty = Difficulty::default();
        assert!(matches!(
            difficulty.effective_target_bits(0x20ffffff, 0x207fffff, 1),
            Err(DifficultyError::NegativeTarget(0x20ffffff))
        ));
        assert!(difficulty.aged_ann_target_bits(0xffffffff, 3).is_err());
        assert!(difficulty.is_ok_slice(&[0u8; 16], 0x207fffff).is_err());
    }

    #[test]
    fn test_aged_ann_target_bits() {
        let difficulty = Difficulty::default();
        assert_eq!(difficulty.aged_ann_target_bits(0x1d00ffff, 2).unwrap().bits(), 0xffffffff);
        assert_eq!(difficulty.aged_ann_target_bits(0x1d00ffff, 3).unwrap().bits(), 0x1d00ffff);
    }

    #[test]
    fn test_shared_across_threads() {
        let difficulty = Difficulty::default();
        let handles: Vec<_> = (1..=4u64)
            .map(|count| {
                std::thread::spawn(move || {
                    difficulty
                        .effective_target_bits(0x1c00ffff, 0x1d00ffff, count)
                        .unwrap()
                        .bits()
                })
            })
            .collect();

        for (count, handle) in (1..=4u64).zip(handles) {
            let expected = Difficulty::default()
                .effective_target_bits(0x1c00ffff, 0x1d00ffff, count)
                .unwrap()
                .bits();
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
