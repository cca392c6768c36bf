use log::warn;

use crate::{
    DecimalType, DecimalWidth, DecodedValue, Error, Family, Result,
    ValueSnapshot, decode_fast, decode_interchange,
};

/// A synthetic child shown beneath a summarized value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticChild {
    pub name: &'static str,
    pub value: String,
}

/// Reads the members of `snapshot` for `ty` and decodes them.
pub fn read_value(
    ty: DecimalType,
    snapshot: &ValueSnapshot,
) -> Result<DecodedValue> {
    let width = ty.width();
    match ty.family() {
        Family::Interchange => {
            let bits = read_wide(snapshot, "bits_", width)?;
            decode_interchange(width, bits)
        }
        Family::Fast => {
            let significand = read_wide(snapshot, "significand_", width)?;
            let exponent = read_exponent(snapshot)?;
            let sign = snapshot.flag("sign_")?;
            decode_fast(width, significand, exponent, sign)
        }
    }
}

/// Summary string for a value of type `ty`.
///
/// Never fails: unreadable members or malformed encodings degrade to
/// `<invalid TYPE: reason>`.
pub fn summary(ty: DecimalType, snapshot: &ValueSnapshot) -> String {
    match read_value(ty, snapshot) {
        Ok(value) => value.to_string(),
        Err(err) => {
            warn!("cannot summarize {}: {}", ty, err);
            format!("<invalid {}: {}>", ty, err)
        }
    }
}

/// Raw members of a value, for display beneath its summary.
///
/// Interchange bit patterns are shown as big-endian hex, fast-family fields
/// in decimal.
pub fn children(
    ty: DecimalType,
    snapshot: &ValueSnapshot,
) -> Result<Vec<SyntheticChild>> {
    let width = ty.width();
    let children = match ty.family() {
        Family::Interchange => {
            let bits = read_wide(snapshot, "bits_", width)?;
            vec![SyntheticChild { name: "bits_", value: hex_bits(width, bits) }]
        }
        Family::Fast => vec![
            SyntheticChild {
                name: "significand_",
                value: read_wide(snapshot, "significand_", width)?.to_string(),
            },
            SyntheticChild {
                name: "exponent_",
                value: read_exponent(snapshot)?.to_string(),
            },
            SyntheticChild {
                name: "sign_",
                value: snapshot.flag("sign_")?.to_string(),
            },
        ],
    };
    Ok(children)
}

/// Position of the named child, or `None` if `ty` has no such member.
pub fn child_index(ty: DecimalType, name: &str) -> Option<usize> {
    ty.member_names().iter().position(|member| *member == name)
}

fn read_wide(
    snapshot: &ValueSnapshot,
    name: &str,
    width: DecimalWidth,
) -> Result<u128> {
    if let Some((stored, bits)) = snapshot.raw_bits(name)? {
        if stored != width {
            return Err(Error::WidthMismatch(name.to_string(), stored));
        }
        return Ok(bits);
    }
    if width == DecimalWidth::Decimal128 {
        return snapshot.words(name);
    }
    let value = u128::from(snapshot.unsigned(name)?);
    if value >> width.bits() != 0 {
        return Err(Error::MemberOutOfRange(name.to_string()));
    }
    Ok(value)
}

fn read_exponent(snapshot: &ValueSnapshot) -> Result<i32> {
    i32::try_from(snapshot.signed("exponent_")?)
        .map_err(|_| Error::MemberOutOfRange("exponent_".to_string()))
}

fn hex_bits(width: DecimalWidth, bits: u128) -> String {
    let bytes = bits.to_be_bytes();
    format!("0x{}", hex::encode(&bytes[bytes.len() - width.len()..]))
}
