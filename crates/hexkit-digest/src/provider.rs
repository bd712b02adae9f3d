//! # RustCrypto-Backed Digest Provider
//!
//! [`StandardDigests`] maps each [`DigestAlgorithm`] to its RustCrypto
//! implementation. The provider is a zero-sized stateless value; one shared
//! instance serves any number of threads.

use hexkit_core::{DigestAlgorithm, DigestProvider, Hex};
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};

/// The standard digest provider: MD5, SHA-1, and SHA-256 via RustCrypto.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardDigests;

impl DigestProvider for StandardDigests {
    fn digest(&self, algorithm: DigestAlgorithm, data: &[u8]) -> Vec<u8> {
        match algorithm {
            DigestAlgorithm::Md5 => Md5::digest(data).to_vec(),
            DigestAlgorithm::Sha1 => Sha1::digest(data).to_vec(),
            DigestAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
        }
    }
}

/// Digest methods directly on [`Hex`], backed by [`StandardDigests`].
///
/// For a custom or fake provider, use
/// [`Hex::digest_with`](hexkit_core::Hex::digest_with) instead.
pub trait HexDigest {
    /// MD5 digest of the full byte content, as a 16-byte value.
    fn md5(&self) -> Hex;
    /// SHA-1 digest of the full byte content, as a 20-byte value.
    fn sha1(&self) -> Hex;
    /// SHA-256 digest of the full byte content, as a 32-byte value.
    fn sha256(&self) -> Hex;
}

impl HexDigest for Hex {
    fn md5(&self) -> Hex {
        self.digest_with(&StandardDigests, DigestAlgorithm::Md5)
    }

    fn sha1(&self) -> Hex {
        self.digest_with(&StandardDigests, DigestAlgorithm::Sha1)
    }

    fn sha256(&self) -> Hex {
        self.digest_with(&StandardDigests, DigestAlgorithm::Sha256)
    }
}
