//!
//! Digest algorithm selection by name
//!

use crate::{Error, Result};
use alloc::vec::Vec;
use core::{fmt, str::FromStr};
use digest::Digest;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};

/// Hash algorithms usable for data signing and verification
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// SHA-1 (legacy; kept for interoperability with existing DSA keys)
    Sha1,
    /// SHA-224
    Sha224,
    /// SHA-256
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
}

impl HashAlgorithm {
    /// Resolve an algorithm by name.
    ///
    /// An empty name is a caller error and is reported before anything is
    /// hashed. Hyphenated and plain spellings both appear in the wild, so
    /// both are accepted.
    pub fn new(name: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(Error::EmptyAlgorithmName);
        }

        match name {
            "SHA1" | "SHA-1" | "sha1" => Ok(Self::Sha1),
            "SHA224" | "SHA-224" | "sha224" => Ok(Self::Sha224),
            "SHA256" | "SHA-256" | "sha256" => Ok(Self::Sha256),
            "SHA384" | "SHA-384" | "sha384" => Ok(Self::Sha384),
            "SHA512" | "SHA-512" | "sha512" => Ok(Self::Sha512),
            _ => Err(Error::UnsupportedHashAlgorithm),
        }
    }

    /// Canonical algorithm name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha1 => "SHA-1",
            Self::Sha224 => "SHA-224",
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
        }
    }

    /// Digest length in bytes
    #[must_use]
    pub const fn output_size(self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha224 => 28,
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    /// One-shot digest with a freshly allocated output
    #[must_use]
    pub fn digest_data(self, data: &[u8]) -> Vec<u8> {
        match self {
            Self::Sha1 => Sha1::digest(data).to_vec(),
            Self::Sha224 => Sha224::digest(data).to_vec(),
            Self::Sha256 => Sha256::digest(data).to_vec(),
            Self::Sha384 => Sha384::digest(data).to_vec(),
            Self::Sha512 => Sha512::digest(data).to_vec(),
        }
    }

    /// Digest into a caller-provided buffer.
    ///
    /// Returns the digest length, or `None` without touching `dest` when it
    /// cannot hold the digest.
    pub fn digest_into(self, data: &[u8], dest: &mut [u8]) -> Option<usize> {
        let size = self.output_size();
        if dest.len() < size {
            return None;
        }

        let digest = self.digest_data(data);
        dest[..size].copy_from_slice(&digest);

        Some(size)
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Self::new(name)
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
