//! Proof-of-work hash acceptance.
//!
//! Hashes arrive in internal (little-endian) byte order. They are compared
//! against targets as big-endian 256-bit numbers.

use num_bigint::BigUint;

use crate::compact::compact_to_big;
use crate::error::DifficultyError;

/// Size of a proof-of-work hash in bytes.
pub const HASH_SIZE: usize = 32;

/// Reverse the byte order of a 32-byte array.
#[inline]
pub fn reverse_bytes(bytes: &[u8; 32]) -> [u8; 32] {
    let mut reversed = *bytes;
    reversed.reverse();
    reversed
}

/// Numeric value of a little-endian hash.
pub fn hash_to_big(hash: &[u8; 32]) -> BigUint {
    BigUint::from_bytes_be(&reverse_bytes(hash))
}

/// Check a hash against compact target bits.
///
/// Passes when the hash is numerically less than or equal to the target.
/// A negative target accepts nothing.
pub fn is_ok(hash: &[u8; 32], target_bits: u32) -> bool {
    match compact_to_big(target_bits) {
        Ok(target) => target >= hash_to_big(hash),
        Err(_) => false,
    }
}

/// Check the first 32 bytes of `hash` against compact target bits.
///
/// Fails with [`DifficultyError::HashTooShort`] if fewer than 32 bytes are
/// supplied.
pub fn is_ok_slice(hash: &[u8], target_bits: u32) -> Result<bool, DifficultyError> {
    let head: &[u8; HASH_SIZE] = hash
        .get(..HASH_SIZE)
        .and_then(|head| head.try_into().ok())
        .ok_or(DifficultyError::HashTooShort(hash.len()))?;
    Ok(is_ok(head, target_bits))
}

/// Convert a hash to its display format (reversed hex).
pub fn hash_to_display_hex(hash: &[u8; 32]) -> String {
    hex::encode(reverse_bytes(hash))
}
