//! Compact "bits" target encoding.
//!
//! The compact format is: [exponent (1 byte)][mantissa (3 bytes)]
//! Value = mantissa * 256^(exponent - 3)
//!
//! Bit 23 of the mantissa is a sign flag. Targets are never negative, so a
//! compact value with the flag set over a non-zero magnitude is rejected at
//! the boundary by [`CompactTarget::new`] and [`compact_to_big`].

use core::fmt;

use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::error::DifficultyError;
use crate::work::work_for_target;

const SIGN_BIT: u32 = 0x0080_0000;
const MANTISSA_MASK: u32 = 0x007f_ffff;

/// Decode a compact value into its magnitude and sign.
///
/// Negative zero is reported as non-negative.
fn decode(bits: u32) -> (BigUint, bool) {
    let exponent = bits >> 24;
    let mantissa = bits & MANTISSA_MASK;

    let magnitude = if exponent <= 3 {
        BigUint::from(mantissa >> (8 * (3 - exponent)))
    } else {
        BigUint::from(mantissa) << (8 * (exponent - 3)) as usize
    };

    let negative = bits & SIGN_BIT != 0 && !magnitude.is_zero();
    (magnitude, negative)
}

/// Low 32 bits of a magnitude.
fn low_u32(n: &BigUint) -> u32 {
    n.iter_u32_digits().next().unwrap_or(0)
}

fn encode(n: &BigUint, negative: bool) -> u32 {
    if n.is_zero() {
        return 0;
    }

    let mut exponent = ((n.bits() + 7) / 8) as u32;
    let mut mantissa = if exponent <= 3 {
        low_u32(n) << (8 * (3 - exponent))
    } else {
        low_u32(&(n >> (8 * (exponent - 3)) as usize))
    };

    // Keep bit 23 free for the sign flag
    if mantissa & SIGN_BIT != 0 {
        mantissa >>= 8;
        exponent += 1;
    }

    let mut compact = (exponent << 24) | mantissa;
    if negative {
        compact |= SIGN_BIT;
    }
    compact
}

/// Decode compact bits to a non-negative magnitude.
///
/// Fails with [`DifficultyError::NegativeTarget`] when the encoding is negative.
pub fn compact_to_big(bits: u32) -> Result<BigUint, DifficultyError> {
    match decode(bits) {
        (_, true) => Err(DifficultyError::NegativeTarget(bits)),
        (magnitude, false) => Ok(magnitude),
    }
}

/// Encode a magnitude as compact bits.
///
/// Exact for every magnitude whose byte length fits the exponent byte, which
/// covers everything up to and beyond 2^256.
pub fn big_to_compact(n: &BigUint) -> u32 {
    encode(n, false)
}

/// Encode the negated magnitude `-n`.
pub(crate) fn negative_to_compact(n: &BigUint) -> u32 {
    encode(n, true)
}

/// A compact target known to decode to a non-negative magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct CompactTarget(u32);

impl CompactTarget {
    /// Protocol minimum difficulty (maximum target).
    pub const MIN_DIFFICULTY: CompactTarget = CompactTarget(0x207f_ffff);

    /// Target zero; only the all-zero hash satisfies it.
    pub const ZERO: CompactTarget = CompactTarget(0);

    /// Validate raw compact bits.
    pub fn new(bits: u32) -> Result<Self, DifficultyError> {
        compact_to_big(bits)?;
        Ok(CompactTarget(bits))
    }

    /// Encode a magnitude. The result is always non-negative.
    pub fn from_big(target: &BigUint) -> Self {
        CompactTarget(big_to_compact(target))
    }

    /// Raw compact bits.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Decoded target magnitude.
    pub fn to_big(self) -> BigUint {
        decode(self.0).0
    }

    /// Work implied by this target.
    pub fn work(self) -> BigUint {
        work_for_target(&self.to_big())
    }

    /// Re-encode through decode/encode, yielding the canonical form.
    pub fn normalized(self) -> Self {
        CompactTarget::from_big(&self.to_big())
    }
}

impl TryFrom<u32> for CompactTarget {
    type Error = DifficultyError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        CompactTarget::new(bits)
    }
}

impl From<CompactTarget> for u32 {
    fn from(target: CompactTarget) -> u32 {
        target.0
    }
}

impl fmt::Display for CompactTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}
