//! # Bitwise Algebra
//!
//! Byte-wise AND, OR, XOR over equal-length operands, and the total unary
//! complement. The binary operations are defined only for matching lengths
//! and reject anything else with [`SizeMismatch`]; there is no implicit
//! padding or truncation, because a silent length adjustment would hide
//! exactly the kind of layout bug these operations surface in practice
//! (key whitening, masking fixed-width fields).
//!
//! Two empty operands are a valid pair for all three binary operations and
//! yield the empty value.

use crate::error::SizeMismatch;
use crate::value::Hex;

impl Hex {
    fn zip_with(&self, other: &Hex, f: impl Fn(u8, u8) -> u8) -> Result<Self, SizeMismatch> {
        if self.len() != other.len() {
            return Err(SizeMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        let bytes = self
            .as_bytes()
            .iter()
            .zip(other.as_bytes())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Self::from_vec(bytes))
    }

    /// Byte-wise AND.
    ///
    /// # Errors
    ///
    /// Returns [`SizeMismatch`] unless both operands have the same length.
    pub fn and(&self, other: &Hex) -> Result<Self, SizeMismatch> {
        self.zip_with(other, |a, b| a & b)
    }

    /// Byte-wise OR.
    ///
    /// # Errors
    ///
    /// Returns [`SizeMismatch`] unless both operands have the same length.
    pub fn or(&self, other: &Hex) -> Result<Self, SizeMismatch> {
        self.zip_with(other, |a, b| a | b)
    }

    /// Byte-wise XOR.
    ///
    /// # Errors
    ///
    /// Returns [`SizeMismatch`] unless both operands have the same length.
    pub fn xor(&self, other: &Hex) -> Result<Self, SizeMismatch> {
        self.zip_with(other, |a, b| a ^ b)
    }

    /// Byte-wise one's complement. Total; the empty value complements to
    /// itself.
    pub fn not(&self) -> Self {
        Self::from_vec(self.as_bytes().iter().map(|&b| !b).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_and() {
        let a = Hex::parse("F0F0").unwrap();
        let b = Hex::parse("0FF0").unwrap();
        assert_eq!(a.and(&b).unwrap().to_hex_string(), "00F0");
    }

    #[test]
    fn test_or() {
        let a = Hex::parse("F0F0").unwrap();
        let b = Hex::parse("0FF0").unwrap();
        assert_eq!(a.or(&b).unwrap().to_hex_string(), "FFF0");
    }

    #[test]
    fn test_xor() {
        let a = Hex::parse("F0F0").unwrap();
        let b = Hex::parse("0FF0").unwrap();
        assert_eq!(a.xor(&b).unwrap().to_hex_string(), "FF00");
    }

    #[test]
    fn test_xor_self_is_zero() {
        let v = Hex::parse("C858B3B299DB").unwrap();
        let zero = v.xor(&v).unwrap();
        assert_eq!(zero.len(), v.len());
        assert!(zero.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_size_mismatch_rejected() {
        let a = Hex::parse("FFFF").unwrap();
        let b = Hex::parse("0F").unwrap();
        let expected = SizeMismatch { left: 2, right: 1 };
        assert_eq!(a.and(&b).unwrap_err(), expected);
        assert_eq!(a.or(&b).unwrap_err(), expected);
        assert_eq!(a.xor(&b).unwrap_err(), expected);
    }

    #[test]
    fn test_empty_operands_are_valid() {
        let e = Hex::empty();
        assert_eq!(e.and(&e).unwrap(), Hex::empty());
        assert_eq!(e.or(&e).unwrap(), Hex::empty());
        assert_eq!(e.xor(&e).unwrap(), Hex::empty());
    }

    #[test]
    fn test_empty_vs_nonempty_is_a_mismatch() {
        let e = Hex::empty();
        let v = Hex::parse("00").unwrap();
        assert!(e.xor(&v).is_err());
    }

    #[test]
    fn test_not() {
        let v = Hex::parse("00FF0F").unwrap();
        assert_eq!(v.not().to_hex_string(), "FF00F0");
        assert_eq!(Hex::empty().not(), Hex::empty());
    }

    #[test]
    fn test_not_involution() {
        let v = Hex::parse("C858B3").unwrap();
        assert_eq!(v.not().not(), v);
    }

    #[test]
    fn test_operands_unchanged() {
        let a = Hex::parse("F0").unwrap();
        let b = Hex::parse("0F").unwrap();
        let _ = a.xor(&b).unwrap();
        assert_eq!(a.to_hex_string(), "F0");
        assert_eq!(b.to_hex_string(), "0F");
    }
}
