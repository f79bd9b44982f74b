//! The canonicalization subsystem (spec.md §2–§7).
//!
//! Module map, leaves first:
//! - [`width`] — bit-width arithmetic (component 1).
//! - [`repack`] — octet↔limb repacker (component 2).
//! - [`endian`] — canonical integer façade (component 3).
//! - [`hex`] — hex codec (component 4).
//! - [`decimal`] — decimal codec (component 5).
//!
//! This module also defines `BigInt` itself and its engine-contract
//! operations (`set_zero`, secret-word add, small-constant multiply,
//! `div10`). spec.md treats the big-integer arithmetic engine as an
//! external collaborator out of scope for this crate; since this is a
//! standalone crate rather than a module inside a larger one, it ships a
//! minimal, correct stand-in so the rest of the subsystem has something
//! real to operate on. It is intentionally thin: no modular reduction, no
//! general multiplication, nothing beyond the five-point consumer contract
//! in spec.md §6.

pub mod decimal;
pub mod endian;
pub mod error;
pub mod hex;
pub mod repack;
pub mod width;

use super::secret::SecretWord;
use super::word::{Limb, low_bits_mask};
use width::words_required;

/// A fixed-bit-width unsigned integer held as `LIMBS` limbs of type `T`,
/// each carrying `WBITS` value bits (`WBITS <= T::BITS`), for a total
/// value width of `BITS` bits.
///
/// Limb 0 is least significant. When `WBITS < T::BITS` each limb's high
/// `T::BITS - WBITS` bits are always zero, and bits of the integer above
/// position `BITS - 1` are always zero — both are invariants maintained by
/// every method on this type.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BigInt<T: Limb, const LIMBS: usize, const WBITS: u32, const BITS: u32> {
    limbs: [T; LIMBS],
}

impl<T: Limb, const LIMBS: usize, const WBITS: u32, const BITS: u32> BigInt<T, LIMBS, WBITS, BITS> {
    /// Compile-time shape check: `LIMBS` must be exactly what `BITS` and
    /// `WBITS` require. Referenced from every constructor so any type alias
    /// that gets the arithmetic wrong fails to build the moment it's used.
    const SHAPE_OK: () = assert!(
        LIMBS == words_required(BITS, WBITS),
        "BigInt<T, LIMBS, WBITS, BITS>: LIMBS does not equal words_required(BITS, WBITS)"
    );

    /// Number of bytes in the tight canonical encoding: `ceil(BITS / 8)`.
    pub const BYTE_LEN: usize = ((BITS as u64 + 7) / 8) as usize;

    /// Number of decimal digits `to_decimal` always emits for this width.
    pub const DECIMAL_LEN: usize = width::decimal_length(BITS);

    pub fn zero() -> Self {
        let _ = Self::SHAPE_OK;
        BigInt { limbs: [T::ZERO; LIMBS] }
    }

    pub fn set_zero(&mut self) {
        for limb in self.limbs.iter_mut() {
            *limb = T::ZERO;
        }
    }

    pub fn limbs(&self) -> &[T; LIMBS] {
        &self.limbs
    }

    pub fn limbs_mut(&mut self) -> &mut [T; LIMBS] {
        &mut self.limbs
    }

    pub(crate) fn from_limbs(limbs: [T; LIMBS]) -> Self {
        let _ = Self::SHAPE_OK;
        BigInt { limbs }
    }

    /// In-place `self += w`, carrying across limbs in base `2^WBITS`.
    /// Overflow past `BITS` bits wraps silently, matching a fixed-width
    /// arithmetic engine.
    pub fn add_word(&mut self, w: SecretWord) {
        let mask = low_bits_mask(WBITS);
        let mut carry: u128 = w.expose_to_engine() as u128;
        for limb in self.limbs.iter_mut() {
            let sum = limb.as_u64() as u128 + carry;
            *limb = T::from_u64((sum as u64) & mask);
            carry = sum >> WBITS;
        }
    }

    /// In-place `self *= small`, for a small **public** multiplier (e.g.
    /// the decimal codec's `10`). Not constant-time with respect to
    /// `small` — spec.md §4.5 only requires the accumulator to be
    /// constant-time over parsed digits, not over this public literal.
    pub fn mul_small(&mut self, small: u32) {
        let mask = low_bits_mask(WBITS);
        let mut carry: u128 = 0;
        for limb in self.limbs.iter_mut() {
            let prod = limb.as_u64() as u128 * small as u128 + carry;
            *limb = T::from_u64((prod as u64) & mask);
            carry = prod >> WBITS;
        }
    }

    /// In-place division by the public constant 10, returning the
    /// remainder (always `0..=9`) as a small public integer.
    pub fn div10(&mut self) -> u8 {
        let mut rem: u64 = 0;
        for limb in self.limbs.iter_mut().rev() {
            let cur = ((rem as u128) << WBITS) | limb.as_u64() as u128;
            *limb = T::from_u64((cur / 10) as u64);
            rem = (cur % 10) as u64;
        }
        rem as u8
    }
}

impl<T: Limb, const LIMBS: usize, const WBITS: u32, const BITS: u32> Default
    for BigInt<T, LIMBS, WBITS, BITS>
{
    fn default() -> Self {
        Self::zero()
    }
}

/// 64-bit integer, native 64-bit limbs.
pub type BigInt64 = BigInt<u64, 1, 64, 64>;
/// 128-bit integer, native 64-bit limbs.
pub type BigInt128 = BigInt<u64, 2, 64, 128>;
/// 255-bit integer (e.g. Curve25519 scalars), native 64-bit limbs.
pub type BigInt255 = BigInt<u64, 4, 64, 255>;
/// 256-bit integer (e.g. secp256k1 field elements), native 64-bit limbs.
pub type BigInt256 = BigInt<u64, 4, 64, 256>;
/// 381-bit integer (e.g. BLS12-381 field elements), native 64-bit limbs.
pub type BigInt381 = BigInt<u64, 6, 64, 381>;
/// 384-bit integer, native 64-bit limbs.
pub type BigInt384 = BigInt<u64, 6, 64, 384>;
/// 448-bit integer (e.g. Curve448 scalars), native 64-bit limbs.
pub type BigInt448 = BigInt<u64, 7, 64, 448>;
/// 512-bit integer, native 64-bit limbs.
pub type BigInt512 = BigInt<u64, 8, 64, 512>;

/// 256-bit integer packed into 32-bit limbs carrying only 24 value bits
/// each — demonstrates the `WBITS < T::BITS` path spec.md §3 describes for
/// architectures lacking an efficient add-with-carry. `words_required(256,
/// 24) == 11`.
pub type BigInt256Narrow = BigInt<u32, 11, 24, 256>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_all_zero_limbs() {
        let z = BigInt256::zero();
        assert_eq!(*z.limbs(), [0u64; 4]);
    }

    #[test]
    fn add_word_carries_across_limbs() {
        let mut v = BigInt128::from_limbs([u64::MAX, 0]);
        v.add_word(SecretWord::new(1));
        assert_eq!(*v.limbs(), [0, 1]);
    }

    #[test]
    fn add_word_wraps_past_top() {
        let mut v = BigInt128::from_limbs([u64::MAX, u64::MAX]);
        v.add_word(SecretWord::new(1));
        assert_eq!(*v.limbs(), [0, 0]);
    }

    #[test]
    fn mul_small_and_div10_are_inverse_on_digits() {
        let mut v = BigInt256::zero();
        v.mul_small(10);
        v.add_word(SecretWord::new(7));
        let r = v.div10();
        assert_eq!(r, 7);
        assert_eq!(*v.limbs(), [0, 0, 0, 0]);
    }

    #[test]
    fn narrow_word_arithmetic_matches_native() {
        let mut narrow = BigInt256Narrow::zero();
        let mut native = BigInt256::zero();

        for d in [1u8, 2, 3, 4, 5] {
            narrow.mul_small(10);
            narrow.add_word(SecretWord::new(d as u64));
            native.mul_small(10);
            native.add_word(SecretWord::new(d as u64));
        }

        assert_eq!(narrow.div10(), native.div10());
    }
}
