//! # Textual Forms — Hex and ASCII Parsing/Rendering
//!
//! Construction of [`Hex`] from hexadecimal text and ASCII text, and the
//! inverse rendering operations.
//!
//! ## Input Cleaning
//!
//! Hex text is cleaned before validation: all whitespace and the separator
//! characters `:`, `-`, `_` are removed wherever they appear, preserving the
//! order of the remaining digits. `"C8-58-B3"`, `"C8:58:B3"`, and
//! `"C858 B3"` all parse to the same value. Validation happens on the
//! cleaned text: the digit count must be even and every remaining character
//! must be a hex digit. An input that cleans to nothing parses to the empty
//! value, not an error.

use std::str::FromStr;

use crate::error::FormatError;
use crate::value::Hex;

/// Separator characters removed from hex text before decoding, in addition
/// to whitespace.
const SEPARATORS: [char; 3] = [':', '-', '_'];

fn is_separator(c: char) -> bool {
    c.is_whitespace() || SEPARATORS.contains(&c)
}

impl Hex {
    /// Parse hexadecimal text into a value.
    ///
    /// Whitespace and the separators `:`, `-`, `_` may appear anywhere and
    /// are ignored. The remaining characters are decoded as consecutive
    /// two-digit groups, most-significant nibble first, preserving input
    /// order. An input that is empty after cleaning yields [`Hex::empty`].
    ///
    /// # Errors
    ///
    /// - [`FormatError::InvalidHexChar`] for any character outside
    ///   `[0-9a-fA-F]` that is not a separator.
    /// - [`FormatError::OddLength`] if the cleaned digit count is odd.
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        let mut nibbles: Vec<u8> = Vec::with_capacity(text.len());
        for (index, ch) in text.chars().enumerate() {
            if is_separator(ch) {
                continue;
            }
            match ch.to_digit(16) {
                Some(d) => nibbles.push(d as u8),
                None => return Err(FormatError::InvalidHexChar { ch, index }),
            }
        }
        if nibbles.len() % 2 != 0 {
            return Err(FormatError::OddLength(nibbles.len()));
        }
        let bytes = nibbles
            .chunks_exact(2)
            .map(|pair| (pair[0] << 4) | pair[1])
            .collect();
        Ok(Self::from_vec(bytes))
    }

    /// Encode ASCII text, one byte per character.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::NonAscii`] for any codepoint >= 0x80; such a
    /// character has no single-byte encoding and silently truncating it
    /// would corrupt the value.
    pub fn from_ascii(text: &str) -> Result<Self, FormatError> {
        let mut bytes = Vec::with_capacity(text.len());
        for (index, ch) in text.chars().enumerate() {
            if !ch.is_ascii() {
                return Err(FormatError::NonAscii { ch, index });
            }
            bytes.push(ch as u8);
        }
        Ok(Self::from_vec(bytes))
    }

    /// Render as uppercase hexadecimal, two characters per byte, no
    /// separators, no `0x` prefix. The empty value renders as `""`.
    ///
    /// Identical to the `Display` output; this is the canonical stable text
    /// form.
    pub fn to_hex_string(&self) -> String {
        self.to_string()
    }

    /// Decode the bytes as ASCII characters, best effort: each byte maps
    /// directly to its codepoint, including bytes >= 0x80.
    pub fn to_ascii(&self) -> String {
        self.as_bytes().iter().map(|&b| b as char).collect()
    }
}

impl FromStr for Hex {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hex::parse(s)
    }
}
