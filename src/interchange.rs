use crate::{DecimalWidth, DecodedValue, Error, InterchangeMasks, Result};

/// Which of the two significand layouts a finite encoding uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignificandLayout {
    /// Combination bits other than `11`: wide explicit significand.
    Primary,
    /// Combination bits `11`: implicit `100` prefix, narrower field.
    Alternate,
}

/// Classification of an interchange bit pattern by its top field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterchangeClass {
    Finite(SignificandLayout),
    Infinity,
    QuietNaN,
    SignalingNaN,
}

/// The raw fields of an interchange encoding, widened to `u128`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedFields {
    pub width: DecimalWidth,
    pub sign: bool,
    pub bits: u128,
}

impl EncodedFields {
    /// Splits a bit pattern of the given width. Bits above the width are
    /// ignored.
    pub fn extract(width: DecimalWidth, bits: u128) -> Self {
        let bits = if width.bits() < 128 {
            bits & ((1u128 << width.bits()) - 1)
        } else {
            bits
        };
        let masks = width.interchange_masks();
        Self { width, sign: bits & masks.sign != 0, bits }
    }

    fn masks(&self) -> &'static InterchangeMasks {
        self.width.interchange_masks()
    }

    fn matches(&self, mask: u128) -> bool { self.bits & mask == mask }

    pub fn layout(&self) -> SignificandLayout {
        if self.matches(self.masks().comb_11) {
            SignificandLayout::Alternate
        } else {
            SignificandLayout::Primary
        }
    }

    /// Checks signaling NaN before quiet NaN before infinity; the first
    /// match wins.
    pub fn classify(&self) -> Result<InterchangeClass> {
        let masks = self.masks();
        if !self.matches(masks.special) {
            return Ok(InterchangeClass::Finite(self.layout()));
        }
        if self.matches(masks.snan) {
            Ok(InterchangeClass::SignalingNaN)
        } else if self.matches(masks.nan) {
            Ok(InterchangeClass::QuietNaN)
        } else if self.bits & masks.nan == masks.special {
            Ok(InterchangeClass::Infinity)
        } else {
            // Unreachable with the standard masks.
            Err(Error::MalformedSpecialEncoding { width: self.width })
        }
    }

    /// Returns the significand and unbiased exponent of a finite encoding.
    pub fn reconstruct(&self, layout: SignificandLayout) -> (u128, i32) {
        let m = self.masks();
        let (significand, biased) = match layout {
            SignificandLayout::Primary => (
                self.bits & m.primary_significand,
                (self.bits & m.primary_exponent) >> m.primary_exponent_shift,
            ),
            SignificandLayout::Alternate => (
                m.alternate_implicit_bit
                    | (self.bits & m.alternate_significand),
                (self.bits & m.alternate_exponent)
                    >> m.alternate_exponent_shift,
            ),
        };
        // The exponent field is at most 14 bits wide.
        (significand, biased as i32 - self.width.bias())
    }

    pub fn payload(&self) -> u128 { self.bits & self.masks().payload() }
}

/// Decodes an interchange bit pattern of the given width.
pub fn decode_interchange(
    width: DecimalWidth,
    bits: u128,
) -> Result<DecodedValue> {
    let fields = EncodedFields::extract(width, bits);
    let sign = fields.sign;
    Ok(match fields.classify()? {
        InterchangeClass::Finite(layout) => {
            let (significand, exponent) = fields.reconstruct(layout);
            DecodedValue::Finite { significand, exponent, sign }
        }
        InterchangeClass::Infinity => DecodedValue::Infinity { sign },
        InterchangeClass::QuietNaN => {
            DecodedValue::QuietNaN { sign, payload: fields.payload() }
        }
        InterchangeClass::SignalingNaN => {
            DecodedValue::SignalingNaN { sign, payload: fields.payload() }
        }
    })
}
