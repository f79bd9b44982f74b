//! Constant-time big-integer canonicalization primitives.
//!
//! This crate provides a fixed-bit-width unsigned integer type and the two
//! conversions every protocol built on top of one actually needs: packing
//! and unpacking raw octet strings (either endianness, any configured limb
//! word size), and parsing/formatting unsigned decimal text. Both paths are
//! built to avoid secret-dependent branches and secret-dependent memory
//! access, so they are safe to use directly on key material, scalars, and
//! other values that must not leak through timing.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level big-integer API. This crate does
//! not implement modular reduction, general multiplication, or any other
//! full arithmetic engine — see [`primitives::bigint`] for the small,
//! explicit set of operations it does provide.
//!
//! # Module overview
//!
//! - `primitives`
//!   The canonicalization subsystem: [`primitives::word`]'s `Limb` trait,
//!   [`primitives::secret`]'s branch-free secret types, and
//!   [`primitives::bigint`]'s `BigInt` type with its width, repacking,
//!   endianness, hex, and decimal components.
//!
//! # Design goals
//!
//! - No secret-dependent branches or memory access in the octet and decimal
//!   codecs
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics
//! - Clear separation between the canonicalization layer and the arithmetic
//!   engine that consumes it
//!
//! This crate is not intended to replace full-featured, externally audited
//! big-integer libraries, but to serve as a small, controlled foundation for
//! the canonicalization layer a larger cryptographic stack builds on.

pub mod primitives;
