//! # Hex — The Immutable Byte-Sequence Value
//!
//! Defines the [`Hex`] type itself: construction from raw buffers, length
//! and byte access, concatenation, copy-on-write byte replacement, and the
//! standard trait surface (`Display`, `Ord`, serde, iteration).
//!
//! ## Invariants
//!
//! - The inner buffer is private; the only mutation-shaped operation,
//!   [`Hex::with_byte_at`], returns a new value and leaves the receiver
//!   untouched.
//! - Constructors copy their input, so later mutation of the source buffer
//!   never affects an existing `Hex`.
//! - Length 0 is a valid, distinct value ([`Hex::empty`], also `Default`).
//!
//! Parsing and rendering of textual forms live in [`crate::text`]; sub-range
//! extraction in [`crate::range`]; padding in [`crate::pad`]; bitwise algebra
//! in [`crate::bitwise`].

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::RangeError;

/// An immutable, ordered sequence of bytes with a pure transformation
/// algebra.
///
/// Equality is byte-for-byte. Ordering is lexicographic over the bytes as
/// unsigned values; when one value is a strict prefix of the other, the
/// shorter one compares less. Both come from the derived impls on the inner
/// `Vec<u8>`, which implement exactly those semantics.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Hex(Vec<u8>);

impl Hex {
    /// The empty value: length 0, renders as `""`.
    ///
    /// Identity element for [`concat`](Self::concat); valid operand for the
    /// bitwise operations when paired with another empty value.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Construct from a whole byte buffer. The buffer is copied.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    /// Construct from `length` bytes of `bytes` starting at `offset`.
    ///
    /// Strict: the span must lie entirely within the buffer.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::SpanOutOfBounds`] if `offset + length`
    /// exceeds `bytes.len()` (overflow-checked).
    pub fn from_bytes_at(bytes: &[u8], offset: usize, length: usize) -> Result<Self, RangeError> {
        let end = offset.checked_add(length).filter(|&e| e <= bytes.len());
        match end {
            Some(end) => Ok(Self(bytes[offset..end].to_vec())),
            None => Err(RangeError::SpanOutOfBounds {
                offset,
                length,
                size: bytes.len(),
            }),
        }
    }

    /// Internal constructor for operations that already own a buffer.
    pub(crate) fn from_vec(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Number of bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if this is the empty value.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the bytes. The borrow is immutable and no API mutates the
    /// buffer, so handing out a reference is safe.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// A fresh copy of the bytes, owned by the caller.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.clone()
    }

    /// The byte at `index` as an unsigned value.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::IndexOutOfBounds`] if `index >= len()`.
    pub fn byte_at(&self, index: usize) -> Result<u8, RangeError> {
        self.0
            .get(index)
            .copied()
            .ok_or(RangeError::IndexOutOfBounds {
                index,
                size: self.0.len(),
            })
    }

    /// A new value identical to this one except the byte at `index` is
    /// `value`. Copy-on-write: the receiver is unchanged, so other holders
    /// of this value never observe the replacement.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::IndexOutOfBounds`] if `index >= len()`.
    pub fn with_byte_at(&self, index: usize, value: u8) -> Result<Self, RangeError> {
        if index >= self.0.len() {
            return Err(RangeError::IndexOutOfBounds {
                index,
                size: self.0.len(),
            });
        }
        let mut bytes = self.0.clone();
        bytes[index] = value;
        Ok(Self(bytes))
    }

    /// This value's bytes followed by `other`'s bytes.
    ///
    /// Associative, with [`Hex::empty`] as the identity, so chained
    /// concatenation evaluates to the same result as a single pass.
    pub fn concat(&self, other: &Hex) -> Self {
        let mut bytes = Vec::with_capacity(self.0.len() + other.0.len());
        bytes.extend_from_slice(&self.0);
        bytes.extend_from_slice(&other.0);
        Self(bytes)
    }

    /// Iterate over the bytes.
    pub fn iter(&self) -> std::slice::Iter<'_, u8> {
        self.0.iter()
    }
}

impl AsRef<[u8]> for Hex {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Hex {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Hex {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl<const N: usize> From<[u8; N]> for Hex {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes.to_vec())
    }
}

impl<'a> IntoIterator for &'a Hex {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders the canonical hex form: uppercase, two chars per byte, no
/// separators. This is the stable serialization format for logs and
/// fixtures.
impl std::fmt::Display for Hex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for b in &self.0 {
            write!(f, "{b:02X}")?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Hex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Hex(\"{self}\")")
    }
}

/// Serializes as the canonical uppercase hex string.
impl Serialize for Hex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

/// Deserializes from hex text via [`Hex::parse`], so separators and
/// whitespace are accepted the same way as in direct parsing.
impl<'de> Deserialize<'de> for Hex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Hex::parse(&text).map_err(de::Error::custom)
    }
}
