//! The validated optimized-key wrapper type.

use crate::codec::{self, TextFormat};
use crate::fields::UuidFields;
use crate::{CodecError, CodecResult, KEY_LEN};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// A UUID in its index-optimized 16-byte binary layout.
///
/// This wrapper guarantees that once constructed, the contained bytes are a
/// well-formed optimized key: `time_hi_and_version | time_mid | time_low |
/// clock_seq | node`. It is the type to use for values headed into or out of
/// a clustered index column.
///
/// # Construction
/// - [`UuidKey::from_text`] parses UUID text (either format).
/// - [`UuidKey::from_bytes`] wraps bytes already in the optimized layout,
///   gating only on length.
/// - `From<uuid::Uuid>` permutes a standard UUID into the optimized layout.
///
/// # Ordering
/// `Ord` compares the raw key bytes. Because the layout leads with the
/// slowest-changing timestamp field, keys built from time-based UUIDs sort
/// in roughly generation order, which is what makes the layout useful as a
/// clustered index key.
///
/// # Display format
/// `Display` renders the hyphenated lowercase text form; use
/// [`UuidKey::to_text`] to choose the format explicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UuidKey([u8; KEY_LEN]);

impl UuidKey {
    /// Parses UUID text into an optimized key.
    ///
    /// # Errors
    ///
    /// Propagates the parser's [`CodecError`] for wrong length, misplaced
    /// separators, or non-hex digits.
    pub fn from_text(text: &str, format: TextFormat) -> CodecResult<Self> {
        codec::encode(text, format).map(Self)
    }

    /// Wraps bytes that are already in the optimized layout.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidLength`] unless `bytes` is exactly 16
    /// bytes. The content is trusted: raw key bytes carry no internal
    /// structure to validate.
    pub fn from_bytes(bytes: &[u8]) -> CodecResult<Self> {
        let key: [u8; KEY_LEN] = bytes.try_into().map_err(|_| CodecError::InvalidLength {
            expected: KEY_LEN,
            actual: bytes.len(),
        })?;
        Ok(Self(key))
    }

    /// Returns the key bytes in optimized layout.
    pub const fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Consumes the key, returning the bytes in optimized layout.
    pub const fn into_bytes(self) -> [u8; KEY_LEN] {
        self.0
    }

    /// Renders the UUID text form of this key.
    pub fn to_text(&self, format: TextFormat) -> String {
        codec::format_key(&self.0, format)
    }

    /// Converts back to a standard [`uuid::Uuid`].
    pub fn to_uuid(&self) -> Uuid {
        Uuid::from_bytes(UuidFields::from_key_bytes(&self.0).to_rfc_bytes())
    }
}

impl From<Uuid> for UuidKey {
    /// Permutes a standard UUID's fields into the optimized layout.
    fn from(uuid: Uuid) -> Self {
        Self(UuidFields::from_rfc_bytes(uuid.as_bytes()).to_key_bytes())
    }
}

impl fmt::Display for UuidKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text(TextFormat::Hyphenated))
    }
}

impl FromStr for UuidKey {
    type Err = CodecError;

    /// Parses hyphenated UUID text. Equivalent to
    /// [`UuidKey::from_text`] with [`TextFormat::Hyphenated`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UuidKey::from_text(s, TextFormat::Hyphenated)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for UuidKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_text(TextFormat::Hyphenated))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for UuidKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        UuidKey::from_text(&s, TextFormat::Hyphenated).map_err(serde::de::Error::custom)
    }
}
