//! Canonical integer façade (spec.md §4.3).
//!
//! The endianness-dispatching entry points that sit between raw byte
//! buffers and a [`BigInt`]. Endianness is a two-valued compile-time-flavored
//! tag, realized as a plain enum per the design note's "sum types over
//! ad-hoc flags" — callers match on it, there is no boolean `is_big_endian`
//! flag anywhere in this crate.

use super::super::word::Limb;
use super::repack::{marshal_be, marshal_le, unmarshal_be, unmarshal_le};
use super::BigInt;

/// Byte order for octet string encodings.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endianness {
    Little,
    Big,
}

impl<T: Limb, const LIMBS: usize, const WBITS: u32, const BITS: u32> BigInt<T, LIMBS, WBITS, BITS> {
    /// Unpacks `src` into `self` per `endianness`. When `BITS == 0` this is
    /// a no-op beyond zeroing the destination (spec.md §4.3).
    pub fn unmarshal(&mut self, src: &[u8], endianness: Endianness) {
        if BITS == 0 {
            self.set_zero();
            return;
        }

        match endianness {
            Endianness::Little => unmarshal_le(self.limbs_mut(), src, WBITS),
            Endianness::Big => unmarshal_be(self.limbs_mut(), src, WBITS),
        }
    }

    /// Packs `self` into `dst` per `endianness`.
    ///
    /// Debug-only assertion that `dst` is at least [`BigInt::BYTE_LEN`]
    /// bytes (spec.md §7, category 2): in release builds an undersized
    /// `dst` silently receives a truncated, best-effort encoding, matching
    /// the teacher's stance that debug assertions are the only guard on
    /// programmer error, not a runtime contract.
    pub fn marshal(&self, dst: &mut [u8], endianness: Endianness) {
        debug_assert!(
            dst.len() >= Self::BYTE_LEN,
            "marshal: destination buffer shorter than BigInt::BYTE_LEN"
        );

        match endianness {
            Endianness::Little => marshal_le(dst, self.limbs(), WBITS),
            Endianness::Big => marshal_be(dst, self.limbs(), WBITS),
        }
    }

    /// Ingests a small public scalar by reinterpreting its host-order bytes
    /// and unmarshalling them in host endianness (spec.md §4.3). The
    /// scalar is public; there is no constant-time requirement here.
    pub fn from_uint(src: u64) -> Self {
        let mut out = Self::zero();
        let bytes = src.to_ne_bytes();

        #[cfg(target_endian = "little")]
        let endianness = Endianness::Little;
        #[cfg(target_endian = "big")]
        let endianness = Endianness::Big;

        out.unmarshal(&bytes, endianness);
        out
    }
}
