//! Conversion between targets and work.
//!
//! work = floor(2^256 / (target + 1))
//! target = floor((2^256 - work) / work)
//!
//! All division truncates. Both directions must use exactly this rounding for
//! every node to agree on effective targets.

use num_bigint::BigUint;
use num_traits::{CheckedSub, One, Zero};

/// 2^256, the exclusive upper bound of a 256-bit value.
pub fn two_pow_256() -> BigUint {
    BigUint::one() << 256usize
}

/// Work implied by a target.
///
/// Target 0 maps to 2^256; any target of 2^256 or more maps to zero work.
pub fn work_for_target(target: &BigUint) -> BigUint {
    two_pow_256() / (target + 1u32)
}

/// Target implied by an amount of work.
///
/// Zero work is minimum difficulty and maps to 2^256. Returns `None` when
/// `work` exceeds 2^256, since no non-negative target carries that much work.
pub fn target_for_work(work: &BigUint) -> Option<BigUint> {
    if work.is_zero() {
        return Some(two_pow_256());
    }
    two_pow_256().checked_sub(work).map(|rest| rest / work)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_work_sentinel() {
        assert_eq!(target_for_work(&BigUint::zero()), Some(two_pow_256()));
    }

    #[test]
    fn test_work_endpoints() {
        assert_eq!(work_for_target(&BigUint::zero()), two_pow_256());
        assert_eq!(work_for_target(&(two_pow_256() - 1u32)), BigUint::one());
        assert_eq!(work_for_target(&two_pow_256()), BigUint::zero());
        assert_eq!(target_for_work(&two_pow_256()), Some(BigUint::zero()));
    }

    #[test]
    fn test_work_beyond_bound_has_no_target() {
        assert_eq!(target_for_work(&(two_pow_256() + 1u32)), None);
    }

    #[test]
    fn test_work_monotonic_vs_target() {
        let targets = [
            BigUint::zero(),
            BigUint::one(),
            BigUint::from(0xffffu32) << 208usize,
            BigUint::from(0x7fffffu32) << 232usize,
            two_pow_256() - 1u32,
        ];

        for pair in targets.windows(2) {
            assert!(
                work_for_target(&pair[0]) >= work_for_target(&pair[1]),
                "harder target must not yield less work"
            );
        }
    }

    #[test]
    fn test_exact_roundtrip_for_inverse_results() {
        let works = [
            BigUint::one(),
            BigUint::from(2u32),
            BigUint::from(3u32),
            BigUint::from(1000u32),
            BigUint::from(u64::MAX) + 8u32,
            BigUint::one() << 128usize,
            BigUint::one() << 255usize,
            two_pow_256(),
        ];

        for work in &works {
            let target = target_for_work(work).unwrap();
            assert_eq!(&work_for_target(&target), work, "roundtrip failed for work {}", work);
        }
    }

    #[test]
    fn test_roundtrip_never_hardens_target() {
        let targets = [
            BigUint::from(12345u32),
            BigUint::from(0xffffu32) << 208usize,
            (BigUint::from(0x034219u32) << 160usize) + 77u32,
            BigUint::from(0x7fffffu32) << 232usize,
        ];

        for target in &targets {
            let back = target_for_work(&work_for_target(target)).unwrap();
            assert!(&back >= target);
        }
    }
}
