//! Bit-width arithmetic utilities (spec.md §4.1).
//!
//! Pure functions over public inputs only — sizes, not values. Used to size
//! limb arrays and decimal text buffers.

/// Rational approximation of `log10(2)`, as a continued-fraction convergent
/// chosen so `decimal_length` never comes up short by more than one digit.
const LOG10_2_NUM: u64 = 12655;
const LOG10_2_DEN: u64 = 42039;

/// `ceil(numerator / denominator)` for `denominator != 0`.
#[inline(always)]
pub const fn ceil_div(numerator: u64, denominator: u64) -> u64 {
    (numerator + denominator - 1) / denominator
}

/// Number of limbs of width `word_bit_width` needed to hold `bits` value
/// bits: `ceil(bits / word_bit_width)`.
#[inline(always)]
pub const fn words_required(bits: u32, word_bit_width: u32) -> usize {
    ceil_div(bits as u64, word_bit_width as u64) as usize
}

/// Upper bound on the number of decimal digits needed to render a `bits`-bit
/// unsigned integer, including the `+1` slack for worst-case rounding.
///
/// Panics (at compile time, when evaluated in a const context such as a
/// `BigInt` type alias) if `bits` is large enough that `bits * LOG10_2_NUM`
/// would overflow `u64` — the overflow guard spec.md §4.1 requires.
#[inline(always)]
pub const fn decimal_length(bits: u32) -> usize {
    assert!(
        (bits as u64) < u64::MAX / LOG10_2_NUM,
        "bit width too large: decimal_length would overflow"
    );
    (1 + (bits as u64 * LOG10_2_NUM) / LOG10_2_DEN) as usize
}

/// Returns `true` iff a `bits`-bit integer can possibly be represented by a
/// decimal string of `decimal_len` characters — i.e. whether parsing should
/// even be attempted before doing the (constant-time) character-by-character
/// work in `from_decimal`.
///
/// A `decimal_len`-digit number is at least `10^(decimal_len - 1)`, so the
/// smallest bit width that can hold one is `ceil((decimal_len - 1) *
/// log2(10))`; this is that bound, evaluated through the same rational
/// convergent `decimal_length` uses for the forward direction (see
/// DESIGN.md for why this is the inverse of `decimal_length` rather than the
/// single-subtraction formula spec.md sketches).
#[inline(always)]
pub const fn has_enough_bits_for_decimal(bits: u32, decimal_len: usize) -> bool {
    if decimal_len == 0 {
        return true;
    }
    if (decimal_len as u64) >= u64::MAX / LOG10_2_DEN {
        return false;
    }
    let needed = ceil_div((decimal_len as u64 - 1) * LOG10_2_DEN, LOG10_2_NUM);
    bits as u64 >= needed
}
