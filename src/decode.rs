//! One entry point per (width, family) pair. Each returns the rendered
//! string or the classification error for that single call.

use crate::{DecimalWidth, Result, decode_fast, decode_interchange};

/// Combines two 64-bit words into a 128-bit value as `(high << 64) | low`.
pub fn compose_words(high: u64, low: u64) -> u128 {
    (u128::from(high) << 64) | u128::from(low)
}

pub fn decode_decimal32(bits: u32) -> Result<String> {
    let value = decode_interchange(DecimalWidth::Decimal32, u128::from(bits))?;
    Ok(value.to_string())
}

pub fn decode_decimal64(bits: u64) -> Result<String> {
    let value = decode_interchange(DecimalWidth::Decimal64, u128::from(bits))?;
    Ok(value.to_string())
}

pub fn decode_decimal128(bits: u128) -> Result<String> {
    Ok(decode_interchange(DecimalWidth::Decimal128, bits)?.to_string())
}

/// Decodes a decimal128 stored as two 64-bit words.
pub fn decode_decimal128_words(high: u64, low: u64) -> Result<String> {
    decode_decimal128(compose_words(high, low))
}

pub fn decode_decimal_fast32(
    significand: u32,
    exponent: i32,
    sign: bool,
) -> Result<String> {
    let significand = u128::from(significand);
    let value =
        decode_fast(DecimalWidth::Decimal32, significand, exponent, sign)?;
    Ok(value.to_string())
}

pub fn decode_decimal_fast64(
    significand: u64,
    exponent: i32,
    sign: bool,
) -> Result<String> {
    let significand = u128::from(significand);
    let value =
        decode_fast(DecimalWidth::Decimal64, significand, exponent, sign)?;
    Ok(value.to_string())
}

pub fn decode_decimal_fast128(
    significand: u128,
    exponent: i32,
    sign: bool,
) -> Result<String> {
    let value =
        decode_fast(DecimalWidth::Decimal128, significand, exponent, sign)?;
    Ok(value.to_string())
}

/// Decodes a decimal_fast128 whose significand is stored as two 64-bit words.
pub fn decode_decimal_fast128_words(
    high: u64,
    low: u64,
    exponent: i32,
    sign: bool,
) -> Result<String> {
    decode_decimal_fast128(compose_words(high, low), exponent, sign)
}
