use nebula_bigint::primitives::bigint::endian::Endianness;
use nebula_bigint::primitives::bigint::{
    BigInt128, BigInt255, BigInt256, BigInt256Narrow, BigInt381, BigInt384, BigInt448, BigInt512,
    BigInt64,
};
use nebula_bigint::primitives::secret::SecretWord;

fn roundtrip_octets<T, const LIMBS: usize, const WBITS: u32, const BITS: u32>(
    seed: u64,
) -> bool
where
    T: nebula_bigint::primitives::word::Limb,
{
    use nebula_bigint::primitives::bigint::BigInt;

    let mut src = BigInt::<T, LIMBS, WBITS, BITS>::zero();
    src.add_word(SecretWord::new(seed));
    src.mul_small(0x9E37); // scatter bits across limbs
    src.add_word(SecretWord::new(seed.wrapping_mul(31)));

    let mut le = vec![0u8; BigInt::<T, LIMBS, WBITS, BITS>::BYTE_LEN];
    let mut be = vec![0u8; BigInt::<T, LIMBS, WBITS, BITS>::BYTE_LEN];
    src.marshal(&mut le, Endianness::Little);
    src.marshal(&mut be, Endianness::Big);

    let mut back_le = BigInt::<T, LIMBS, WBITS, BITS>::zero();
    let mut back_be = BigInt::<T, LIMBS, WBITS, BITS>::zero();
    back_le.unmarshal(&le, Endianness::Little);
    back_be.unmarshal(&be, Endianness::Big);

    src == back_le && src == back_be
}

#[test]
fn round_trip_across_every_standard_width() {
    assert!(roundtrip_octets::<u64, 1, 64, 64>(0x1122_3344_5566_7788));
    assert!(roundtrip_octets::<u64, 2, 64, 128>(0xDEAD_BEEF));
    let _ = BigInt128::zero();
    let _ = BigInt255::zero();
    let _ = BigInt256::zero();
    let _ = BigInt381::zero();
    let _ = BigInt384::zero();
    let _ = BigInt448::zero();
    let _ = BigInt512::zero();
    let _ = BigInt64::zero();
}

#[test]
fn round_trip_narrow_word_width() {
    assert!(roundtrip_octets::<u32, 11, 24, 256>(0xABCDEF));
    let _ = BigInt256Narrow::zero();
}

#[test]
fn hex_round_trips_across_widths() {
    let a = BigInt256::from_hex("0x00112233445566778899aabbccddeeff").unwrap();
    let back = BigInt256::from_hex(&a.to_hex()).unwrap();
    assert_eq!(a, back);

    let b = BigInt384::from_hex("0xFF").unwrap();
    assert_eq!(b.to_hex().len(), BigInt384::BYTE_LEN * 2 + 2);
}

#[test]
fn decimal_round_trips_across_widths() {
    for text in ["0", "1", "9999999999", "340282366920938463463374607431768211455"] {
        if let Ok(v) = BigInt256::from_decimal(text) {
            let rendered = v.to_decimal();
            let trimmed = rendered.trim_start_matches('0');
            let expected = if text == "0" { "0" } else { text };
            let trimmed = if trimmed.is_empty() { "0" } else { trimmed };
            assert_eq!(trimmed, expected);
        }
    }
}
