use core::fmt;

use crate::{Error, Result};

/// Storage width of a decimal floating-point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecimalWidth {
    /// 4-octet decimal32 (7 digits, bias 101)
    Decimal32,
    /// 8-octet decimal64 (16 digits, bias 398)
    Decimal64,
    /// 16-octet decimal128 (34 digits, bias 6176)
    Decimal128,
}

#[allow(clippy::len_without_is_empty)]
impl DecimalWidth {
    pub fn from_len(len: usize) -> Result<Self> {
        match len {
            4 => Ok(Self::Decimal32),
            8 => Ok(Self::Decimal64),
            16 => Ok(Self::Decimal128),
            _ => Err(Error::InvalidLength(len)),
        }
    }

    /// Size of the interchange encoding in bytes.
    pub fn len(self) -> usize {
        match self {
            Self::Decimal32 => 4,
            Self::Decimal64 => 8,
            Self::Decimal128 => 16,
        }
    }

    pub fn bits(self) -> u32 { self.len() as u32 * 8 }

    /// Value subtracted from the encoded exponent field.
    pub fn bias(self) -> i32 {
        match self {
            Self::Decimal32 => 101,
            Self::Decimal64 => 398,
            Self::Decimal128 => 6176,
        }
    }

    /// Maximum number of decimal digits in a finite significand.
    pub fn precision(self) -> u32 {
        match self {
            Self::Decimal32 => 7,
            Self::Decimal64 => 16,
            Self::Decimal128 => 34,
        }
    }
}

impl fmt::Display for DecimalWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "decimal{}", self.bits())
    }
}
