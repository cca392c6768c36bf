use dcbor::prelude::*;

use crate::{DecimalWidth, Error, Result, compose_words};

/// A host-independent view of an inspected in-memory value: a CBOR map
/// from member name to member value.
///
/// Debugger plugins read the raw fields of a value (`bits_`, or
/// `significand_`/`exponent_`/`sign_`) and hand them over as a snapshot,
/// optionally serialized to CBOR bytes. 128-bit members are nested maps
/// with `high` and `low` words; any bit-pattern member may instead be a
/// byte string holding the value's big-endian bytes.
#[derive(Debug, Clone)]
pub struct ValueSnapshot(Map);

impl Default for ValueSnapshot {
    fn default() -> Self { Self::new() }
}

impl ValueSnapshot {
    pub fn new() -> Self { Self(Map::new()) }

    /// Adds or replaces a member.
    pub fn with_member(mut self, name: &str, value: impl Into<CBOR>) -> Self {
        self.0.insert(name, value);
        self
    }

    /// Adds a 128-bit member as a nested `{high, low}` map.
    pub fn with_words(self, name: &str, high: u64, low: u64) -> Self {
        let words =
            Self::new().with_member("high", high).with_member("low", low);
        self.with_member(name, words)
    }

    pub fn from_cbor_data(data: impl AsRef<[u8]>) -> Result<Self> {
        let cbor = CBOR::try_from_data(data)?;
        Self::try_from(cbor)
    }

    pub fn to_cbor_data(&self) -> Vec<u8> {
        CBOR::from(self.clone()).to_cbor_data()
    }

    pub fn member(&self, name: &str) -> Result<CBOR> {
        self.0
            .get::<&str, CBOR>(name)
            .ok_or_else(|| Error::MissingMember(name.to_string()))
    }

    pub fn nested(&self, name: &str) -> Result<ValueSnapshot> {
        Self::try_from(self.member(name)?)
    }

    pub fn unsigned(&self, name: &str) -> Result<u64> {
        u64::try_from(self.member(name)?)
            .map_err(|_| Error::MemberOutOfRange(name.to_string()))
    }

    pub fn signed(&self, name: &str) -> Result<i64> {
        i64::try_from(self.member(name)?)
            .map_err(|_| Error::MemberOutOfRange(name.to_string()))
    }

    /// Reads a flag stored either as a boolean or as an integer, where any
    /// nonzero integer counts as set.
    pub fn flag(&self, name: &str) -> Result<bool> {
        let cbor = self.member(name)?;
        if let Ok(flag) = bool::try_from(cbor.clone()) {
            return Ok(flag);
        }
        if let Ok(value) = i64::try_from(cbor) {
            return Ok(value != 0);
        }
        Err(Error::MemberOutOfRange(name.to_string()))
    }

    /// Reads a 128-bit member stored as a `{high, low}` map.
    pub fn words(&self, name: &str) -> Result<u128> {
        let words = self.nested(name)?;
        Ok(compose_words(words.unsigned("high")?, words.unsigned("low")?))
    }

    /// Reads a member stored as the raw big-endian bytes of a value.
    ///
    /// Returns `None` if the member is not a byte string, and the width
    /// implied by the byte count otherwise.
    pub fn raw_bits(&self, name: &str) -> Result<Option<(DecimalWidth, u128)>> {
        let bytes: ByteString = match self.member(name)?.try_into() {
            Ok(bytes) => bytes,
            Err(_) => return Ok(None),
        };
        let width = DecimalWidth::from_len(bytes.len())?;
        let bits = bytes
            .data()
            .iter()
            .fold(0u128, |bits, byte| (bits << 8) | u128::from(*byte));
        Ok(Some((width, bits)))
    }
}

impl From<ValueSnapshot> for CBOR {
    fn from(value: ValueSnapshot) -> Self { CBOR::from(value.0) }
}

impl TryFrom<CBOR> for ValueSnapshot {
    type Error = Error;
    fn try_from(cbor: CBOR) -> Result<Self> {
        Ok(Self(cbor.try_into_map()?))
    }
}
