/// The logical content of a decimal bit pattern, before rendering.
///
/// The significand and exponent are kept exactly as encoded; no cohort
/// normalization is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodedValue {
    /// `significand × 10^exponent`, negated when `sign` is set. The exponent
    /// is already unbiased.
    Finite { significand: u128, exponent: i32, sign: bool },
    Infinity { sign: bool },
    QuietNaN { sign: bool, payload: u128 },
    SignalingNaN { sign: bool, payload: u128 },
}

impl DecodedValue {
    pub fn sign(&self) -> bool {
        match *self {
            Self::Finite { sign, .. }
            | Self::Infinity { sign }
            | Self::QuietNaN { sign, .. }
            | Self::SignalingNaN { sign, .. } => sign,
        }
    }

    pub fn is_finite(&self) -> bool { matches!(self, Self::Finite { .. }) }

    pub fn is_infinite(&self) -> bool { matches!(self, Self::Infinity { .. }) }

    pub fn is_nan(&self) -> bool {
        matches!(self, Self::QuietNaN { .. } | Self::SignalingNaN { .. })
    }

    /// Returns the NaN payload, or `None` for non-NaN values.
    pub fn payload(&self) -> Option<u128> {
        match *self {
            Self::QuietNaN { payload, .. }
            | Self::SignalingNaN { payload, .. } => Some(payload),
            _ => None,
        }
    }

    /// Returns the `(significand, exponent)` pair of a finite value.
    pub fn components(&self) -> Option<(u128, i32)> {
        match *self {
            Self::Finite { significand, exponent, .. } => {
                Some((significand, exponent))
            }
            _ => None,
        }
    }
}
