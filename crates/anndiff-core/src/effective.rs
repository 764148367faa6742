//! Effective target for announcement-assisted blocks.
//!
//! A block header commits to its own target, the minimum work of the
//! announcements it was mined with, and how many there were. Together they
//! determine the target the block hash actually has to beat:
//!
//! effective_work = header_work^3 / min_ann_work / ann_count

use log::trace;
use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::compact::{negative_to_compact, CompactTarget};
use crate::hash::is_ok;
use crate::network::DifficultyParams;
use crate::work::{target_for_work, two_pow_256};

/// Outcome of the effective target computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectiveTarget {
    /// Target the block hash must not exceed.
    Target(CompactTarget),
    /// Effective work exceeds 2^256. The wire value encodes target -1,
    /// which no hash satisfies.
    Unsatisfiable,
}

impl EffectiveTarget {
    /// Compact bits as committed on the wire.
    pub fn bits(&self) -> u32 {
        match self {
            EffectiveTarget::Target(target) => target.bits(),
            EffectiveTarget::Unsatisfiable => negative_to_compact(&BigUint::one()),
        }
    }

    /// The target, if any hash can satisfy it.
    pub fn target(&self) -> Option<CompactTarget> {
        match self {
            EffectiveTarget::Target(target) => Some(*target),
            EffectiveTarget::Unsatisfiable => None,
        }
    }

    /// Check a little-endian block hash against this target.
    pub fn is_satisfied_by(&self, hash: &[u8; 32]) -> bool {
        is_ok(hash, self.bits())
    }
}

/// Work a block hash must represent.
///
/// Without announcement work (no announcements, or a minimum announcement
/// target so easy it carries no work) the requirement is 2^256 - 1.
///
/// The cube and both divisions run in this exact order; each intermediate
/// truncates.
pub fn effective_work(header_work: &BigUint, min_ann_work: &BigUint, ann_count: u64) -> BigUint {
    if min_ann_work.is_zero() || ann_count == 0 {
        trace!("no announcement work, requiring maximum work");
        return two_pow_256() - BigUint::one();
    }

    let mut out = header_work * header_work;
    out *= header_work;

    out /= min_ann_work;
    out /= ann_count;

    out
}

/// Compute the effective target from a header target, the minimum
/// announcement target and the announcement count.
///
/// Results easier than `params.min_difficulty` are clamped to it.
pub fn effective_target(
    params: &DifficultyParams,
    header_target: CompactTarget,
    min_ann_target: CompactTarget,
    ann_count: u64,
) -> EffectiveTarget {
    let header_work = header_target.work();
    let min_ann_work = min_ann_target.work();

    let work = effective_work(&header_work, &min_ann_work, ann_count);

    let outcome = match target_for_work(&work) {
        Some(target) => EffectiveTarget::Target(CompactTarget::from_big(&target)),
        None => {
            trace!(
                "effective work exceeds 2^256 for header {} with min ann {} x{}",
                header_target,
                min_ann_target,
                ann_count
            );
            EffectiveTarget::Unsatisfiable
        }
    };

    if outcome.bits() > params.min_difficulty.bits() {
        trace!("effective target {:#010x} clamped to {}", outcome.bits(), params.min_difficulty);
        return EffectiveTarget::Target(params.min_difficulty);
    }

    outcome
}
