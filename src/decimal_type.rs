use core::fmt;

use crate::DecimalWidth;

/// How a decimal type lays out its value in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Packed interchange bit pattern in a single `bits_` member.
    Interchange,
    /// Separate `significand_`, `exponent_` and `sign_` members.
    Fast,
}

/// The six logical decimal types a debugger can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecimalType {
    Decimal32,
    Decimal64,
    Decimal128,
    DecimalFast32,
    DecimalFast64,
    DecimalFast128,
}

impl DecimalType {
    pub const ALL: [DecimalType; 6] = [
        Self::Decimal32,
        Self::Decimal64,
        Self::Decimal128,
        Self::DecimalFast32,
        Self::DecimalFast64,
        Self::DecimalFast128,
    ];

    /// Unqualified type name as it appears in debug info.
    pub fn name(self) -> &'static str {
        match self {
            Self::Decimal32 => "decimal32_t",
            Self::Decimal64 => "decimal64_t",
            Self::Decimal128 => "decimal128_t",
            Self::DecimalFast32 => "decimal_fast32_t",
            Self::DecimalFast64 => "decimal_fast64_t",
            Self::DecimalFast128 => "decimal_fast128_t",
        }
    }

    pub fn width(self) -> DecimalWidth {
        match self {
            Self::Decimal32 | Self::DecimalFast32 => DecimalWidth::Decimal32,
            Self::Decimal64 | Self::DecimalFast64 => DecimalWidth::Decimal64,
            Self::Decimal128 | Self::DecimalFast128 => DecimalWidth::Decimal128,
        }
    }

    pub fn family(self) -> Family {
        match self {
            Self::Decimal32 | Self::Decimal64 | Self::Decimal128 => {
                Family::Interchange
            }
            _ => Family::Fast,
        }
    }

    /// Members exposed as synthetic children, in display order.
    pub fn member_names(self) -> &'static [&'static str] {
        match self.family() {
            Family::Interchange => &["bits_"],
            Family::Fast => &["significand_", "exponent_", "sign_"],
        }
    }
}

impl fmt::Display for DecimalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
