use decimal_pretty::{
    DecimalWidth, DecodedValue, EncodedFields, InterchangeClass,
    SignificandLayout, decode_decimal32, decode_decimal64, decode_decimal128,
    decode_decimal128_words, decode_interchange,
};
use hex_literal::hex;

fn d32(bytes: [u8; 4]) -> u32 { u32::from_be_bytes(bytes) }

fn d64(bytes: [u8; 8]) -> u64 { u64::from_be_bytes(bytes) }

/// Packs a well-formed finite value, choosing the alternate layout when the
/// significand does not fit the primary field.
fn encode(width: DecimalWidth, significand: u128, biased_exp: u128) -> u128 {
    let m = width.interchange_masks();
    if significand <= m.primary_significand {
        (biased_exp << m.primary_exponent_shift) | significand
    } else {
        assert_eq!(
            significand & !m.alternate_significand,
            m.alternate_implicit_bit
        );
        m.comb_11
            | (biased_exp << m.alternate_exponent_shift)
            | (significand & m.alternate_significand)
    }
}

#[test]
fn decimal32_zero() {
    assert_eq!(decode_decimal32(0x0000_0000).unwrap(), "0.0e+0");
}

#[test]
fn decimal32_primary_layout() {
    // significand 123, exponent field 101 (bias) => 123e0
    let bits = d32(hex!("3280007b"));
    assert_eq!(bits, (101 << 23) | 123);
    assert_eq!(decode_decimal32(bits).unwrap(), "1.23e+2");
}

#[test]
fn decimal32_negative_small_exponent() {
    // sign set, significand 5, exponent field 99
    assert_eq!(decode_decimal32(d32(hex!("b1800005"))).unwrap(), "-5e-2");
}

#[test]
fn decimal32_alternate_layout() {
    // combination bits 11: implicit 0x800000 | 0x1FFFFF, exponent field 101
    let bits = d32(hex!("6cbfffff"));
    let fields =
        EncodedFields::extract(DecimalWidth::Decimal32, u128::from(bits));
    assert_eq!(fields.layout(), SignificandLayout::Alternate);
    assert_eq!(
        fields.reconstruct(SignificandLayout::Alternate),
        (0x9F_FFFF, 0)
    );
    assert_eq!(decode_decimal32(bits).unwrap(), "1.0485759e+7");
}

#[test]
fn decimal32_specials() {
    assert_eq!(decode_decimal32(0x7800_0000).unwrap(), "INF");
    assert_eq!(decode_decimal32(0xF800_0000).unwrap(), "-INF");
    assert_eq!(decode_decimal32(0x7C00_0000).unwrap(), "QNAN");
    assert_eq!(decode_decimal32(0xFC00_002A).unwrap(), "-QNAN(42)");
    assert_eq!(decode_decimal32(0x7E00_0005).unwrap(), "SNAN(5)");
    assert_eq!(decode_decimal32(0xFE00_0000).unwrap(), "-SNAN");
}

#[test]
fn decimal32_cohorts_stay_distinct() {
    // 10e-1 and 100e-2 are equal values with different encodings
    assert_eq!(decode_decimal32((100 << 23) | 10).unwrap(), "1.0e+0");
    assert_eq!(decode_decimal32((99 << 23) | 100).unwrap(), "1.00e+0");
}

#[test]
fn decimal64_finite() {
    let bits = d64(hex!("31c462d53c8abac0"));
    assert_eq!(decode_decimal64(bits).unwrap(), "1.234567890123456e+15");

    let alternate = d64(hex!("6c70000000000001"));
    assert_eq!(
        decode_decimal64(alternate).unwrap(),
        "9.007199254740993e+15"
    );
}

#[test]
fn decimal64_specials() {
    assert_eq!(decode_decimal64(0x7800_0000_0000_0000).unwrap(), "INF");
    assert_eq!(decode_decimal64(0xF800_0000_0000_0000).unwrap(), "-INF");
    assert_eq!(decode_decimal64(0x7E00_0000_0000_0007).unwrap(), "SNAN(7)");
    assert_eq!(decode_decimal64(0x7C00_0000_0000_0000).unwrap(), "QNAN");
}

#[test]
fn decimal128_finite() {
    assert_eq!(
        decode_decimal128_words(0x3040_0000_0000_0000, 1).unwrap(),
        "1e+0"
    );

    let max = 9_999_999_999_999_999_999_999_999_999_999_999u128;
    let bits = (6176u128 << 113) | max;
    assert_eq!(
        decode_decimal128(bits).unwrap(),
        "9.999999999999999999999999999999999e+33"
    );
}

#[test]
fn decimal128_alternate_layout() {
    // implicit bit 113 only, exponent field 6176
    assert_eq!(
        decode_decimal128_words(0x6C10_0000_0000_0000, 0).unwrap(),
        "1.0384593717069655257060992658440192e+34"
    );
}

#[test]
fn decimal128_specials() {
    assert_eq!(
        decode_decimal128_words(0xF800_0000_0000_0000, 0).unwrap(),
        "-INF"
    );
    assert_eq!(
        decode_decimal128_words(0x7C00_0000_0000_0000, 123).unwrap(),
        "QNAN(123)"
    );
    // payload spans both words
    assert_eq!(
        decode_decimal128_words(0x7C00_0000_0000_0001, 0).unwrap(),
        "QNAN(18446744073709551616)"
    );
}

#[test]
fn bias_yields_zero_exponent() {
    for (width, bits) in [
        (DecimalWidth::Decimal32, (101u128 << 23) | 7),
        (DecimalWidth::Decimal64, (398u128 << 53) | 7),
        (DecimalWidth::Decimal128, (6176u128 << 113) | 7),
    ] {
        assert_eq!(
            decode_interchange(width, bits).unwrap(),
            DecodedValue::Finite { significand: 7, exponent: 0, sign: false },
            "{width}"
        );
    }
}

#[test]
fn zero_ignores_sign_and_exponent() {
    assert_eq!(decode_decimal32(0x8000_0000 | (50 << 23)).unwrap(), "0.0e+0");
    assert_eq!(decode_decimal64(0x8000_0000_0000_0000).unwrap(), "0.0e+0");
    assert_eq!(
        decode_decimal128_words(0xB040_0000_0000_0000, 0).unwrap(),
        "0.0e+0"
    );
}

#[test]
fn layout_follows_combination_bits() {
    for base in [0x0000_0001u32, 0x0012_3456, 0x0765_4321, 0x8001_0000] {
        let alternate = base | 0x6000_0000;
        let primary = (base & !0x6000_0000) | 0x2000_0000;
        for (bits, layout) in [
            (alternate, SignificandLayout::Alternate),
            (primary, SignificandLayout::Primary),
        ] {
            let fields = EncodedFields::extract(
                DecimalWidth::Decimal32,
                u128::from(bits),
            );
            assert_eq!(fields.layout(), layout, "{bits:#010x}");
            assert!(decode_decimal32(bits).is_ok(), "{bits:#010x}");
        }
    }
}

#[test]
fn every_top_byte_classifies() {
    for width in [
        DecimalWidth::Decimal32,
        DecimalWidth::Decimal64,
        DecimalWidth::Decimal128,
    ] {
        for top in 0u128..=0xFF {
            let bits = (top << (width.bits() - 8)) | 0x1234;
            let fields = EncodedFields::extract(width, bits);
            let class = fields.classify().unwrap();
            let special = top & 0x78 == 0x78;
            assert_eq!(
                matches!(class, InterchangeClass::Finite(_)),
                !special,
                "{width} top={top:#04x}"
            );
            if special {
                let expected = match top & 0x7E {
                    0x7E => InterchangeClass::SignalingNaN,
                    0x7C => InterchangeClass::QuietNaN,
                    _ => InterchangeClass::Infinity,
                };
                assert_eq!(class, expected, "{width} top={top:#04x}");
            }
            assert!(decode_interchange(width, bits).is_ok());
        }
    }
}

#[test]
fn well_formed_significands_fit_precision() {
    for width in [
        DecimalWidth::Decimal32,
        DecimalWidth::Decimal64,
        DecimalWidth::Decimal128,
    ] {
        let max = 10u128.pow(width.precision()) - 1;
        let biased = u128::try_from(width.bias()).unwrap();
        for significand in [1, max / 9, max / 3, max] {
            let bits = encode(width, significand, biased);
            let value = decode_interchange(width, bits).unwrap();
            let (decoded, exponent) = value.components().unwrap();
            assert_eq!((decoded, exponent), (significand, 0), "{width}");
            assert!(
                decoded.to_string().len() <= width.precision() as usize,
                "{width}"
            );
        }
        let digits = decode_interchange(width, encode(width, max, biased))
            .unwrap()
            .to_string()
            .chars()
            .filter(char::is_ascii_digit)
            .count();
        // mantissa digits plus the exponent digits of `e+N`
        let exponent_digits = (width.precision() - 1).to_string().len();
        assert_eq!(
            digits,
            width.precision() as usize + exponent_digits,
            "{width}"
        );
    }
}

#[test]
fn bits_above_width_are_ignored() {
    let value = decode_interchange(
        DecimalWidth::Decimal32,
        (1u128 << 40) | 0x7800_0000,
    );
    assert_eq!(value.unwrap(), DecodedValue::Infinity { sign: false });
}
