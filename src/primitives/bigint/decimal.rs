//! Decimal codec (spec.md §4.5).
//!
//! `from_decimal` is the one parsing path in this crate required to be
//! constant-time over the *value* of every character it consumes: it walks
//! every byte of the input exactly once, always performs the same
//! multiply-accumulate step, and only ever branches on the input's public
//! length (against [`super::width::has_enough_bits_for_decimal`]) and on the
//! final validity verdict it hands back to the caller.

use super::super::secret::{ct_ascii_digit, SecretBool, SecretWord};
use super::super::word::Limb;
use super::error::DecimalError;
use super::width::has_enough_bits_for_decimal;
use super::BigInt;

impl<T: Limb, const LIMBS: usize, const WBITS: u32, const BITS: u32> BigInt<T, LIMBS, WBITS, BITS> {
    /// Parses an unsigned decimal string, constant-time over its digit
    /// values.
    ///
    /// Returns `SecretBool::TRUE` in the first element iff every byte of
    /// `s` was an ASCII digit; `self` is always fully overwritten (on
    /// failure, with whatever partial accumulation the constant-time walk
    /// produced), matching spec.md's in-place-API convention of staying
    /// infallible and leaving validity reporting to the caller.
    pub fn from_decimal_ct(&mut self, s: &str) -> SecretBool {
        self.set_zero();
        let bytes = s.as_bytes();
        let mut all_ok = SecretBool::TRUE;

        for &byte in bytes {
            let (ok, digit) = ct_ascii_digit(byte);
            all_ok = all_ok.and(ok);
            self.mul_small(10);
            self.add_word(SecretWord::new(digit as u64));
        }

        all_ok
    }

    /// Out-of-place decimal parse.
    ///
    /// Pre-checks `s.len()` against [`has_enough_bits_for_decimal`] before
    /// touching a single digit, so an oversized string is rejected by shape
    /// alone; spec.md §7 permits this wrapper to leak the input's length
    /// (never its digits) through the returned error.
    pub fn from_decimal(s: &str) -> Result<Self, DecimalError> {
        if !has_enough_bits_for_decimal(BITS, s.len()) {
            return Err(DecimalError::TooManyDigits);
        }

        let mut out = Self::zero();
        if out.from_decimal_ct(s).reveal() {
            Ok(out)
        } else {
            Err(DecimalError::InvalidDigit)
        }
    }

    /// Renders `self` as exactly [`BigInt::DECIMAL_LEN`] decimal digits,
    /// left-padded with `'0'`, by repeatedly dividing a scratch copy by 10
    /// and writing remainders from the end backwards.
    pub fn to_decimal(&self) -> String {
        let mut scratch = *self;
        let mut digits = vec![0u8; Self::DECIMAL_LEN];

        for slot in digits.iter_mut().rev() {
            *slot = b'0' + scratch.div10();
        }

        String::from_utf8(digits).expect("decimal digits are always valid ASCII")
    }
}
