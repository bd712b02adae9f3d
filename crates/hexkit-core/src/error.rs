//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types raised by [`Hex`](crate::Hex) operations. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Every error is raised synchronously at the call that violates the
//!   precondition; no operation leaves a partially constructed value behind.
//! - Errors carry the concrete offending values (character, index, operand
//!   sizes) so callers can report them without re-deriving context.
//! - The enums derive `PartialEq`/`Eq` so tests and callers can match on
//!   exact variants.

use thiserror::Error;

/// Top-level error type for hexkit operations.
///
/// Each operation returns its specific error type; this umbrella exists for
/// callers that funnel several operations through one `Result`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum HexError {
    /// Malformed hex or ASCII text.
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// Out-of-range index or span passed to a strict operation.
    #[error("range error: {0}")]
    Range(#[from] RangeError),

    /// Operand length mismatch in a bitwise operation.
    #[error("size mismatch: {0}")]
    SizeMismatch(#[from] SizeMismatch),
}

/// Malformed textual input to [`Hex::parse`](crate::Hex::parse) or
/// [`Hex::from_ascii`](crate::Hex::from_ascii).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormatError {
    /// The hex text has an odd number of digits once whitespace and
    /// separators are stripped, so it cannot form whole bytes.
    #[error("hex text has odd length {0} after separator removal")]
    OddLength(usize),

    /// A character outside `[0-9a-fA-F]` (and not a separator) appeared in
    /// hex text. `index` is the char position in the original input.
    #[error("invalid hex character {ch:?} at position {index}")]
    InvalidHexChar {
        /// The offending character.
        ch: char,
        /// Char position in the original, uncleaned input.
        index: usize,
    },

    /// A character with codepoint >= 0x80 appeared in ASCII text; it cannot
    /// encode as a single byte.
    #[error("character {ch:?} at position {index} is outside the ASCII range")]
    NonAscii {
        /// The offending character.
        ch: char,
        /// Char position in the input.
        index: usize,
    },
}

/// Out-of-range argument to a strict operation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RangeError {
    /// A single index fell outside `[0, size)`.
    #[error("index {index} out of bounds for size {size}")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The value's byte length.
        size: usize,
    },

    /// A span `[offset, offset + length)` fell outside `[0, size]`.
    #[error("span of {length} bytes at offset {offset} out of bounds for size {size}")]
    SpanOutOfBounds {
        /// The span's starting offset.
        offset: usize,
        /// The span's requested length.
        length: usize,
        /// The value's byte length (or source buffer length).
        size: usize,
    },
}

/// Operand lengths differ in a bitwise AND/OR/XOR.
///
/// The byte-wise operations are defined only over equal-length operands;
/// there is no implicit padding or truncation.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("left operand is {left} bytes, right operand is {right} bytes")]
pub struct SizeMismatch {
    /// Byte length of the left operand.
    pub left: usize,
    /// Byte length of the right operand.
    pub right: usize,
}
