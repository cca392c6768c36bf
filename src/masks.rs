//! Per-width bit masks for the interchange encoding and the reserved
//! significand sentinels of the fast encoding.
//!
//! All masks are widened to `u128` so one decoder serves every width; for
//! decimal128 the high word occupies bits 64..128.

use crate::DecimalWidth;

/// Field layout of a binary-integer-significand interchange encoding.
///
/// ```text
/// Primary form (top two combination bits != 11):
///   s eeeeeeee...       ttt tttttttttt ...
/// Alternate form (top two combination bits == 11):
///   s 11 eeeeeeee...  [100]t tttttttttt ...
/// ```
///
/// In the alternate form the significand carries an implicit `100` prefix,
/// so only the low bits are stored and one extra implicit bit is OR'd in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterchangeMasks {
    pub sign: u128,
    /// Top field all ones: infinity or NaN.
    pub special: u128,
    pub nan: u128,
    pub snan: u128,
    /// Top two combination bits, selecting the alternate form.
    pub comb_11: u128,

    pub primary_significand: u128,
    pub primary_exponent: u128,
    pub primary_exponent_shift: u32,

    pub alternate_implicit_bit: u128,
    pub alternate_significand: u128,
    pub alternate_exponent: u128,
    pub alternate_exponent_shift: u32,
}

impl InterchangeMasks {
    /// NaN payloads occupy the primary significand field.
    pub const fn payload(&self) -> u128 { self.primary_significand }
}

pub const DECIMAL32_MASKS: InterchangeMasks = InterchangeMasks {
    sign: 0x8000_0000,
    special: 0x7800_0000,
    nan: 0x7C00_0000,
    snan: 0x7E00_0000,
    comb_11: 0x6000_0000,

    primary_significand: 0x007F_FFFF,
    primary_exponent: 0x7F80_0000,
    primary_exponent_shift: 23,

    alternate_implicit_bit: 0x0080_0000,
    alternate_significand: 0x001F_FFFF,
    alternate_exponent: 0x1FE0_0000,
    alternate_exponent_shift: 21,
};

pub const DECIMAL64_MASKS: InterchangeMasks = InterchangeMasks {
    sign: 0x8000_0000_0000_0000,
    special: 0x7800_0000_0000_0000,
    nan: 0x7C00_0000_0000_0000,
    snan: 0x7E00_0000_0000_0000,
    comb_11: 0x6000_0000_0000_0000,

    primary_significand: 0x001F_FFFF_FFFF_FFFF,
    primary_exponent: 0x7FE0_0000_0000_0000,
    primary_exponent_shift: 53,

    alternate_implicit_bit: 0x0020_0000_0000_0000,
    alternate_significand: 0x0007_FFFF_FFFF_FFFF,
    alternate_exponent: 0x1FF8_0000_0000_0000,
    alternate_exponent_shift: 51,
};

// The 128-bit exponent and classification fields sit entirely in the high
// word; the significand spans both words.
pub const DECIMAL128_MASKS: InterchangeMasks = InterchangeMasks {
    sign: 0x8000_0000_0000_0000 << 64,
    special: 0x7800_0000_0000_0000 << 64,
    nan: 0x7C00_0000_0000_0000 << 64,
    snan: 0x7E00_0000_0000_0000 << 64,
    comb_11: 0x6000_0000_0000_0000 << 64,

    primary_significand: (1 << 113) - 1,
    primary_exponent: 0x7FFE_0000_0000_0000 << 64,
    primary_exponent_shift: 49 + 64,

    alternate_implicit_bit: 1 << 113,
    alternate_significand: (1 << 111) - 1,
    alternate_exponent: 0x1FFF_8000_0000_0000 << 64,
    alternate_exponent_shift: 47 + 64,
};

/// Reserved significand values of the fast encoding.
///
/// A finite significand is always below `inf`. Infinity is exactly `inf`,
/// quiet NaNs start at `qnan` and signaling NaNs at `snan`; a NaN's payload
/// is its significand XOR the sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FastSentinels {
    pub inf: u128,
    pub qnan: u128,
    pub snan: u128,
}

pub const DECIMAL_FAST32_SENTINELS: FastSentinels = FastSentinels {
    inf: 0x2000_0000,
    qnan: 0x6000_0000,
    snan: 0xE000_0000,
};

pub const DECIMAL_FAST64_SENTINELS: FastSentinels = FastSentinels {
    inf: 0x2000_0000_0000_0000,
    qnan: 0x6000_0000_0000_0000,
    snan: 0xE000_0000_0000_0000,
};

// Sentinels occupy the high word of the 128-bit significand.
pub const DECIMAL_FAST128_SENTINELS: FastSentinels = FastSentinels {
    inf: 0x2000_0000_0000_0000 << 64,
    qnan: 0x6000_0000_0000_0000 << 64,
    snan: 0xE000_0000_0000_0000 << 64,
};

impl DecimalWidth {
    pub fn interchange_masks(self) -> &'static InterchangeMasks {
        match self {
            Self::Decimal32 => &DECIMAL32_MASKS,
            Self::Decimal64 => &DECIMAL64_MASKS,
            Self::Decimal128 => &DECIMAL128_MASKS,
        }
    }

    pub fn fast_sentinels(self) -> &'static FastSentinels {
        match self {
            Self::Decimal32 => &DECIMAL_FAST32_SENTINELS,
            Self::Decimal64 => &DECIMAL_FAST64_SENTINELS,
            Self::Decimal128 => &DECIMAL_FAST128_SENTINELS,
        }
    }
}
