//! Announcement aging.
//!
//! An announcement can be used once it is `ann_wait_period` blocks old. From
//! then on its work is divided by how many blocks it has aged past that point,
//! so stale announcements count for less.

use log::trace;

use crate::compact::CompactTarget;
use crate::network::DifficultyParams;
use crate::work::target_for_work;

/// Target used when valuing an announcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgedTarget {
    /// Announcement is usable with this (possibly aged) target.
    Target(CompactTarget),
    /// Announcement cannot be added to a block.
    NotUsable,
}

impl AgedTarget {
    /// Wire value for an unusable announcement.
    pub const NOT_USABLE_BITS: u32 = 0xffff_ffff;

    /// Compact bits, with [`Self::NOT_USABLE_BITS`] for unusable announcements.
    pub fn bits(&self) -> u32 {
        match self {
            AgedTarget::Target(target) => target.bits(),
            AgedTarget::NotUsable => Self::NOT_USABLE_BITS,
        }
    }

    /// The aged target, if usable.
    pub fn target(&self) -> Option<CompactTarget> {
        match self {
            AgedTarget::Target(target) => Some(*target),
            AgedTarget::NotUsable => None,
        }
    }

    pub fn is_usable(&self) -> bool {
        matches!(self, AgedTarget::Target(_))
    }

    /// Interpret wire bits; the sentinel and negative encodings are unusable.
    pub fn from_bits(bits: u32) -> Self {
        match CompactTarget::new(bits) {
            Ok(target) => AgedTarget::Target(target),
            Err(_) => AgedTarget::NotUsable,
        }
    }
}

/// Target to value an announcement at, given its age in blocks.
///
/// The minimum announcement work committed in a block must be no more than
/// the least aged work of any announcement it includes.
pub fn aged_ann_target(params: &DifficultyParams, target: CompactTarget, ann_age_blocks: u32) -> AgedTarget {
    if ann_age_blocks < params.ann_wait_period {
        trace!("announcement aged {} blocks is not ready", ann_age_blocks);
        return AgedTarget::NotUsable;
    }

    // Fresh: no aging, only normalized
    if ann_age_blocks == params.ann_wait_period {
        return AgedTarget::Target(target.normalized());
    }

    let age = ann_age_blocks - params.ann_wait_period;
    let work = target.work() / age;

    let aged = match target_for_work(&work) {
        Some(aged) => CompactTarget::from_big(&aged),
        None => return AgedTarget::NotUsable,
    };

    if aged.bits() > params.min_difficulty.bits() {
        trace!("announcement {} aged {} blocks past the wait is too weak", target, age);
        return AgedTarget::NotUsable;
    }

    AgedTarget::Target(aged)
}
