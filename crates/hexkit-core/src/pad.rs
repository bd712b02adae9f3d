//! # Padding
//!
//! Extends a [`Hex`] value to a target length by prepending ([`lpad`]) or
//! appending ([`rpad`]) fill bytes. A target at or below the current length
//! is a no-op that returns an equal value; padding never truncates and never
//! errors.
//!
//! [`lpad`]: Hex::lpad
//! [`rpad`]: Hex::rpad

use crate::value::Hex;

impl Hex {
    /// Pad on the left with zero bytes up to `total_len`.
    pub fn lpad(&self, total_len: usize) -> Self {
        self.lpad_with(total_len, 0x00)
    }

    /// Pad on the left with `pad_byte` up to `total_len`. Returns an equal
    /// value when `total_len <= len()`.
    pub fn lpad_with(&self, total_len: usize, pad_byte: u8) -> Self {
        if total_len <= self.len() {
            return self.clone();
        }
        let mut bytes = vec![pad_byte; total_len - self.len()];
        bytes.extend_from_slice(self.as_bytes());
        Self::from_vec(bytes)
    }

    /// Pad on the right with zero bytes up to `total_len`.
    pub fn rpad(&self, total_len: usize) -> Self {
        self.rpad_with(total_len, 0x00)
    }

    /// Pad on the right with `pad_byte` up to `total_len`. Returns an equal
    /// value when `total_len <= len()`.
    pub fn rpad_with(&self, total_len: usize, pad_byte: u8) -> Self {
        if total_len <= self.len() {
            return self.clone();
        }
        let mut bytes = self.to_bytes();
        bytes.resize(total_len, pad_byte);
        Self::from_vec(bytes)
    }
}
