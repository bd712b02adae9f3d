//! # hexkit-core — Immutable Hex Byte-Sequence Value Type
//!
//! This crate defines [`Hex`], an immutable, arbitrary-length sequence of
//! bytes with a pure transformation algebra. Every operation either produces
//! a new `Hex` or a primitive (length, byte, string, ordering); nothing
//! mutates an existing value.
//!
//! ## Key Design Principles
//!
//! 1. **Private inner buffer.** `Hex` wraps a private `Vec<u8>`; constructors
//!    copy their input and `to_bytes()` hands out a fresh copy, so no outside
//!    code can alias or mutate a value's content.
//!
//! 2. **Clamping vs strict operations are distinct by name.** `left`, `right`,
//!    `slice`, and `mid` silently clamp out-of-range arguments — they exist
//!    for ad-hoc truncation and display. `u1`, `u2`, `un`, `byte_at`, and
//!    `from_bytes_at` reject out-of-range arguments with [`RangeError`] —
//!    they decode fixed binary layouts where a bad index is a real bug.
//!    The split is part of the contract, not an implementation detail.
//!
//! 3. **Byte-wise ordering.** `Ord` is derived on the inner bytes:
//!    lexicographic over unsigned values, a strict prefix sorts before the
//!    longer value. Never the rendered-string ordering.
//!
//! 4. **Digests are an injected capability.** The crate defines the
//!    [`DigestProvider`] seam and [`DigestAlgorithm`] tags but implements no
//!    hash function; `hexkit-digest` supplies the standard provider.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `hexkit-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All fallible operations return `Result` with a typed error.

pub mod bitwise;
pub mod digest;
pub mod error;
pub mod pad;
pub mod range;
pub mod text;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use digest::{DigestAlgorithm, DigestProvider};
pub use error::{FormatError, HexError, RangeError, SizeMismatch};
pub use value::Hex;
