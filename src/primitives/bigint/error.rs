//! Error types for the text codecs (spec.md §7, category 3).
//!
//! Plain `Debug`-only enums, no `Display`/`std::error::Error` impls — this
//! matches the teacher's own error types (`Argon2ParamError`,
//! `SecretSharingError`, `Chacha20Poly1305Error`), none of which implement
//! those traits either.

/// Failure returned by the hex codec's out-of-place wrapper.
///
/// Per spec.md §7: the presence of the `0x`/`0X` prefix and the length of
/// the hex string are public, so this error carries no part of a secret
/// input — only shape information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexError {
    /// A character outside `[0-9a-fA-F]` was found (after stripping any
    /// `0x`/`0X` prefix).
    InvalidDigit,
    /// The decoded value does not fit in the destination's byte length.
    TooLong,
}

/// Failure returned by the decimal codec's out-of-place wrapper.
///
/// spec.md §7: "A wrapper that allocates a new big-integer from decimal
/// text is permitted to raise a public-facing exception/error carrying no
/// part of the secret input." `TooManyDigits` and `InvalidDigit` both
/// satisfy that — the first carries only the input's public length, the
/// second carries no information about which character(s) failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecimalError {
    /// `has_enough_bits_for_decimal` rejected the string's length outright.
    TooManyDigits,
    /// At least one character fell outside `'0'..='9'`.
    InvalidDigit,
}
