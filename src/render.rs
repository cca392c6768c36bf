use core::fmt;

use crate::DecodedValue;

/// Renders a decoded value in scientific notation.
///
/// Every digit of the significand is kept: `123 × 10^0` becomes `1.23e+2`,
/// and a single digit is written without a decimal point (`5e-3`). Any zero
/// significand is written as `0.0e+0` regardless of sign or exponent.
/// Specials are `INF`, `QNAN` and `SNAN`, with a nonzero NaN payload
/// appended in parentheses.
pub fn render(value: &DecodedValue) -> String { value.to_string() }

impl fmt::Display for DecodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            DecodedValue::Finite { significand, exponent, sign } => {
                write_finite(f, significand, exponent, sign)
            }
            DecodedValue::Infinity { sign } => write_special(f, "INF", sign, 0),
            DecodedValue::QuietNaN { sign, payload } => {
                write_special(f, "QNAN", sign, payload)
            }
            DecodedValue::SignalingNaN { sign, payload } => {
                write_special(f, "SNAN", sign, payload)
            }
        }
    }
}

fn write_special(
    f: &mut fmt::Formatter<'_>,
    tag: &str,
    sign: bool,
    payload: u128,
) -> fmt::Result {
    if sign {
        f.write_str("-")?;
    }
    f.write_str(tag)?;
    if payload > 0 {
        write!(f, "({})", payload)?;
    }
    Ok(())
}

fn write_finite(
    f: &mut fmt::Formatter<'_>,
    significand: u128,
    exponent: i32,
    sign: bool,
) -> fmt::Result {
    if significand == 0 {
        return f.write_str("0.0e+0");
    }

    let digits = significand.to_string();
    let (lead, rest) = digits.split_at(1);
    // At most 39 digits, so the adjustment cannot overflow.
    let total_exp = i64::from(exponent) + rest.len() as i64;

    if sign {
        f.write_str("-")?;
    }
    f.write_str(lead)?;
    if !rest.is_empty() {
        write!(f, ".{}", rest)?;
    }
    write!(f, "e{:+}", total_exp)
}
