//! Sanity check for the miner-supplied minimum announcement difficulty.

use num_traits::Zero;

use crate::compact::compact_to_big;
use crate::network::DifficultyParams;
use crate::work::{two_pow_256, work_for_target};

/// Reject minimum announcement targets which would make the effective
/// target computation misbehave.
///
/// The bits must be non-zero, no greater than `params.ann_min_diff_limit`,
/// and decode to a target whose work lies strictly between 0 and 2^256.
pub fn is_ann_min_diff_ok(params: &DifficultyParams, bits: u32) -> bool {
    if bits == 0 || bits > params.ann_min_diff_limit {
        return false;
    }
    let target = match compact_to_big(bits) {
        Ok(target) => target,
        Err(_) => return false,
    };
    let work = work_for_target(&target);
    !work.is_zero() && work < two_pow_256()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(bits: u32) -> bool {
        is_ann_min_diff_ok(&DifficultyParams::pkt(), bits)
    }

    #[test]
    fn test_structural_bounds() {
        assert!(!check(0));
        assert!(!check(0x21000000));
        assert!(!check(0x21010000));
        assert!(!check(0xffffffff));
    }

    #[test]
    fn test_legitimate_targets() {
        assert!(check(0x1d00ffff));
        assert!(check(0x1b0404cb));
        assert!(check(0x207fffff));
        // Target 1 has work 2^255
        assert!(check(0x03000001));
    }

    #[test]
    fn test_zero_target_rejected() {
        // Each decodes to target 0, whose work is 2^256
        assert!(!check(0x03000000));
        assert!(!check(0x01003456));
        assert!(!check(0x20800000));
    }

    #[test]
    fn test_negative_rejected() {
        assert!(!check(0x20ffffff));
        assert!(!check(0x01810000));
        assert!(!check(0x1d80ffff));
    }

    #[test]
    fn test_custom_limit() {
        let params = DifficultyParams {
            ann_min_diff_limit: 0x1e00ffff,
            ..DifficultyParams::pkt()
        };
        assert!(is_ann_min_diff_ok(&params, 0x1d00ffff));
        assert!(!is_ann_min_diff_ok(&params, 0x1f00ffff));
    }
}
