use crate::DecimalWidth;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("CBOR error ({0})")]
    Cbor(#[from] dcbor::Error),

    #[error("invalid type pattern ({0})")]
    Pattern(#[from] regex::Error),

    #[error("invalid decimal length: expected 4, 8, or 16 bytes, got {0}")]
    InvalidLength(usize),

    #[error("malformed special encoding for {width}")]
    MalformedSpecialEncoding { width: DecimalWidth },

    #[error("significand in reserved range of {width} matches no sentinel")]
    MalformedFastSentinel { width: DecimalWidth },

    #[error("exponent {exponent} out of range for {width}")]
    ExponentOutOfRange { width: DecimalWidth, exponent: i32 },

    #[error("member `{0}` holds a {1} bit pattern")]
    WidthMismatch(String, DecimalWidth),

    #[error("missing member `{0}`")]
    MissingMember(String),

    #[error("member `{0}` out of range")]
    MemberOutOfRange(String),

    #[error("no printer registered for type `{0}`")]
    UnknownType(String),
}

pub type Result<T> = std::result::Result<T, Error>;
