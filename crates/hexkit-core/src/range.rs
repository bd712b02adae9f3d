//! # Sub-Range Extraction
//!
//! Two families of operations pull bytes out of a [`Hex`] value, and the
//! difference between them is contractual:
//!
//! - **Clamping** — [`left`](Hex::left), [`right`](Hex::right),
//!   [`slice`](Hex::slice), [`mid`](Hex::mid). Truncation helpers for
//!   display and ad-hoc exploration: out-of-range arguments are silently
//!   pulled into bounds and the result is simply shorter (possibly empty).
//! - **Strict** — [`u1`](Hex::u1), [`u2`](Hex::u2), [`un`](Hex::un).
//!   Field extraction for fixed binary layouts (TLV records and the like),
//!   where an out-of-range request means the layout assumption is wrong and
//!   must fail loudly with [`RangeError`].
//!
//! Callers pick the family that matches their intent; the two must not be
//! conflated.

use crate::error::RangeError;
use crate::value::Hex;

impl Hex {
    /// The first `n` bytes. Clamping: `n` larger than the value returns the
    /// whole value, `n == 0` returns empty.
    pub fn left(&self, n: usize) -> Self {
        let end = n.min(self.len());
        Self::from_vec(self.as_bytes()[..end].to_vec())
    }

    /// The last `n` bytes. Clamping, mirror of [`left`](Self::left).
    pub fn right(&self, n: usize) -> Self {
        let start = self.len().saturating_sub(n);
        Self::from_vec(self.as_bytes()[start..].to_vec())
    }

    /// The bytes in `[start, end)`. Both bounds clamp into `[0, len]`;
    /// `start >= end` after clamping yields empty. Never errors.
    pub fn slice(&self, start: usize, end: usize) -> Self {
        let size = self.len();
        let start = start.min(size);
        let end = end.min(size);
        if start >= end {
            return Self::empty();
        }
        Self::from_vec(self.as_bytes()[start..end].to_vec())
    }

    /// `length` bytes starting at `start`, clamped to the end of the value.
    ///
    /// A `start` at or past the end yields empty; a `length` reaching past
    /// the end is truncated to the available bytes. Never errors.
    pub fn mid(&self, start: usize, length: usize) -> Self {
        let size = self.len();
        if start >= size {
            return Self::empty();
        }
        let end = start.saturating_add(length).min(size);
        Self::from_vec(self.as_bytes()[start..end].to_vec())
    }

    /// Everything from `start` to the end; `mid` with the length defaulted.
    pub fn mid_from(&self, start: usize) -> Self {
        self.mid(start, self.len().saturating_sub(start))
    }

    /// The single byte at `index`, as a one-byte value.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::IndexOutOfBounds`] if `index >= len()`.
    pub fn u1(&self, index: usize) -> Result<Self, RangeError> {
        let byte = self.byte_at(index)?;
        Ok(Self::from_vec(vec![byte]))
    }

    /// The two bytes at `[index, index + 2)`, as a two-byte value.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::IndexOutOfBounds`] if either position is out
    /// of bounds.
    pub fn u2(&self, index: usize) -> Result<Self, RangeError> {
        let first = self.byte_at(index)?;
        let second = self
            .byte_at(index + 1)
            .map_err(|_| RangeError::IndexOutOfBounds {
                index: index + 1,
                size: self.len(),
            })?;
        Ok(Self::from_vec(vec![first, second]))
    }

    /// `length` bytes starting at `index`.
    ///
    /// Strict on both arguments: `index` must point inside the value (even
    /// when `length == 0`) and the whole span must fit.
    ///
    /// # Errors
    ///
    /// - [`RangeError::IndexOutOfBounds`] if `index >= len()`.
    /// - [`RangeError::SpanOutOfBounds`] if `index + length > len()`
    ///   (overflow-checked).
    pub fn un(&self, index: usize, length: usize) -> Result<Self, RangeError> {
        let size = self.len();
        if index >= size {
            return Err(RangeError::IndexOutOfBounds { index, size });
        }
        let end = index.checked_add(length).filter(|&e| e <= size);
        match end {
            Some(end) => Ok(Self::from_vec(self.as_bytes()[index..end].to_vec())),
            None => Err(RangeError::SpanOutOfBounds {
                offset: index,
                length,
                size,
            }),
        }
    }
}
