//! Constant-time big-integer canonicalization.
//!
//! A fixed-bit-width unsigned integer type, [`bigint::BigInt`], parameterized
//! at compile time over its limb type, limb count, per-limb value-bit width,
//! and total bit width. It converts between that representation and the two
//! exchange formats every protocol and wire format actually uses: raw octet
//! strings (either endianness) and decimal text. The octet and decimal paths
//! never branch, index, or loop on secret data.
//!
//! - [`word`] — the `Limb` trait sealing which machine word types may back a
//!   `BigInt` (`u32`, `u64`).
//! - [`secret`] — `SecretBool`/`SecretWord`, the branch-free types the
//!   decimal parser is built from.
//! - [`bigint`] — `BigInt` itself and its five components: bit-width
//!   arithmetic, the octet↔limb repacker, the canonical integer façade, and
//!   the hex and decimal codecs.

pub mod bigint;
pub mod secret;
pub mod word;
