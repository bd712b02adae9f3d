//! # Digest Seam — Injected Hash Capability
//!
//! [`Hex`] does not implement any hash algorithm. It defines the
//! [`DigestProvider`] trait and feeds its full byte content through whatever
//! provider the caller supplies, wrapping the raw digest output as a new
//! value. The standard provider backed by the RustCrypto crates lives in
//! `hexkit-digest`; tests here use a fake provider to exercise the seam
//! without any real cryptography.

use crate::value::Hex;

/// The digest algorithms a provider must support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    /// MD5 — 16-byte digest. Broken for collision resistance; supported for
    /// interop with legacy formats only.
    Md5,
    /// SHA-1 — 20-byte digest.
    Sha1,
    /// SHA-256 — 32-byte digest.
    Sha256,
}

impl DigestAlgorithm {
    /// Returns the algorithm identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
        }
    }

    /// The algorithm's standard digest length in bytes.
    pub fn output_len(&self) -> usize {
        match self {
            Self::Md5 => 16,
            Self::Sha1 => 20,
            Self::Sha256 => 32,
        }
    }
}

impl std::fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A source of cryptographic digests.
///
/// Implementations must be deterministic and pure: the same `(algorithm,
/// data)` pair always yields the same output, of exactly
/// [`DigestAlgorithm::output_len`] bytes.
pub trait DigestProvider {
    /// Compute the digest of `data` under `algorithm`.
    fn digest(&self, algorithm: DigestAlgorithm, data: &[u8]) -> Vec<u8>;
}

impl Hex {
    /// Digest this value's full byte content with `provider` and wrap the
    /// raw output as a new value.
    pub fn digest_with<P: DigestProvider + ?Sized>(
        &self,
        provider: &P,
        algorithm: DigestAlgorithm,
    ) -> Hex {
        Hex::from_vec(provider.digest(algorithm, self.as_bytes()))
    }
}
