use crate::{DecimalWidth, DecodedValue, Error, Result};

/// The separately stored fields of a fast-family decimal.
///
/// `exponent` is the biased exponent as stored; `significand` may hold one
/// of the reserved sentinels instead of a digit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FastFields {
    pub width: DecimalWidth,
    pub significand: u128,
    pub exponent: i32,
    pub sign: bool,
}

impl FastFields {
    pub fn new(
        width: DecimalWidth,
        significand: u128,
        exponent: i32,
        sign: bool,
    ) -> Self {
        Self { width, significand, exponent, sign }
    }

    /// The bits compared against the sentinels: the whole significand, or
    /// only its high word for decimal128.
    fn reserved_bits(&self) -> u128 {
        match self.width {
            DecimalWidth::Decimal128 => {
                self.significand & !u128::from(u64::MAX)
            }
            _ => self.significand,
        }
    }

    pub fn decode(&self) -> Result<DecodedValue> {
        let sentinels = self.width.fast_sentinels();
        let reserved = self.reserved_bits();
        let sign = self.sign;

        if reserved < sentinels.inf {
            let exponent = self
                .exponent
                .checked_sub(self.width.bias())
                .ok_or(Error::ExponentOutOfRange {
                    width: self.width,
                    exponent: self.exponent,
                })?;
            return Ok(DecodedValue::Finite {
                significand: self.significand,
                exponent,
                sign,
            });
        }
        if reserved >= sentinels.snan {
            Ok(DecodedValue::SignalingNaN {
                sign,
                payload: self.significand ^ sentinels.snan,
            })
        } else if reserved >= sentinels.qnan {
            Ok(DecodedValue::QuietNaN {
                sign,
                payload: self.significand ^ sentinels.qnan,
            })
        } else if reserved == sentinels.inf {
            Ok(DecodedValue::Infinity { sign })
        } else {
            Err(Error::MalformedFastSentinel { width: self.width })
        }
    }
}

/// Decodes pre-split fast-family fields of the given width.
pub fn decode_fast(
    width: DecimalWidth,
    significand: u128,
    exponent: i32,
    sign: bool,
) -> Result<DecodedValue> {
    FastFields::new(width, significand, exponent, sign).decode()
}
