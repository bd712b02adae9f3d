//! # hexkit-digest — Standard Digest Provider
//!
//! Implements the [`DigestProvider`](hexkit_core::DigestProvider) seam from
//! `hexkit-core` over the RustCrypto digest crates:
//!
//! - **MD5** via `md-5` (legacy interop only; do not use for integrity).
//! - **SHA-1** via `sha1`.
//! - **SHA-256** via `sha2`.
//!
//! The [`HexDigest`] extension trait puts `md5()`, `sha1()`, and `sha256()`
//! directly on [`Hex`](hexkit_core::Hex) for callers that do not need to
//! inject their own provider.
//!
//! ## Crate Policy
//!
//! - Depends only on `hexkit-core` internally.
//! - No mocking of digest computation in tests — all tests run the real
//!   algorithms against published vectors.

pub mod provider;

pub use provider::{HexDigest, StandardDigests};
