//!
//! Password-based encrypted PKCS#8 import and export
//!

use crate::{Error, Result, SigningKey};
use pkcs8::{
    der::{Decode, Reader, SliceReader},
    pkcs5::pbes2,
    DecodePrivateKey, EncodePrivateKey, EncryptedPrivateKeyInfo, PrivateKeyInfo, SecretDocument,
};
use signature::rand_core::CryptoRngCore;

/// Password material for encrypted PKCS#8 operations.
///
/// Exactly one representation per call; a text password is fed to the key
/// derivation as its UTF-8 bytes.
#[derive(Clone, Copy)]
pub enum Password<'a> {
    /// Raw byte password
    Bytes(&'a [u8]),

    /// Text password
    Text(&'a str),
}

impl Password<'_> {
    fn as_bytes(&self) -> &[u8] {
        match self {
            Password::Bytes(bytes) => bytes,
            Password::Text(text) => text.as_bytes(),
        }
    }
}

impl<'a> From<&'a [u8]> for Password<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Password::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for Password<'a> {
    fn from(text: &'a str) -> Self {
        Password::Text(text)
    }
}

/// Symmetric cipher wrapping the encrypted key
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PbeCipher {
    /// AES-128 in CBC mode
    Aes128Cbc,

    /// AES-256 in CBC mode
    Aes256Cbc,
}

/// Parameters for password-based encryption of private keys.
///
/// The key derivation function is PBKDF2 with HMAC-SHA-256; salt and IV are
/// drawn fresh from the caller's CSPRNG on every encryption.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct PbeParameters {
    /// Cipher wrapping the serialized key
    pub cipher: PbeCipher,

    /// PBKDF2 iteration count; must be nonzero
    pub iterations: u32,
}

impl PbeParameters {
    /// Checked before any key material is touched
    fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(Error::InvalidPbeParameters);
        }

        Ok(())
    }
}

impl Default for PbeParameters {
    fn default() -> Self {
        Self {
            cipher: PbeCipher::Aes256Cbc,
            iterations: 600_000,
        }
    }
}

impl SigningKey {
    /// Serialize the key as password-encrypted PKCS#8.
    ///
    /// The plaintext PKCS#8 intermediate lives in a [`SecretDocument`] and is
    /// wiped when it drops, on success and failure alike.
    pub fn to_pkcs8_encrypted_der(
        &self,
        rng: &mut impl CryptoRngCore,
        password: Password<'_>,
        pbe: &PbeParameters,
    ) -> Result<SecretDocument> {
        pbe.validate()?;

        let mut salt = [0u8; 16];
        rng.fill_bytes(&mut salt);
        let mut iv = [0u8; 16];
        rng.fill_bytes(&mut iv);

        let scheme = match pbe.cipher {
            PbeCipher::Aes128Cbc => {
                pbes2::Parameters::pbkdf2_sha256_aes128cbc(pbe.iterations, &salt, &iv)
            }
            PbeCipher::Aes256Cbc => {
                pbes2::Parameters::pbkdf2_sha256_aes256cbc(pbe.iterations, &salt, &iv)
            }
        }
        .map_err(|_| Error::InvalidPbeParameters)?;

        let plaintext = self.to_pkcs8_der()?;
        let info = PrivateKeyInfo::from_der(plaintext.as_bytes())?;

        info.encrypt_with_params(scheme, password.as_bytes())
            .map_err(|_| Error::Encryption)
    }

    /// Parse a key from password-encrypted PKCS#8.
    ///
    /// A wrong password, a malformed envelope and an unsupported encryption
    /// scheme are indistinguishable from the error alone.
    pub fn from_pkcs8_encrypted_der(bytes: &[u8], password: Password<'_>) -> Result<Self> {
        let (key, _) = Self::from_pkcs8_encrypted_der_partial(bytes, password)?;

        Ok(key)
    }

    /// Like [`Self::from_pkcs8_encrypted_der`], but tolerates trailing data
    /// and reports how many bytes the outer envelope consumed.
    pub fn from_pkcs8_encrypted_der_partial(
        bytes: &[u8],
        password: Password<'_>,
    ) -> Result<(Self, usize)> {
        let mut reader = SliceReader::new(bytes).map_err(|_| Error::Encryption)?;
        let envelope =
            EncryptedPrivateKeyInfo::decode(&mut reader).map_err(|_| Error::Encryption)?;
        let consumed = u32::from(reader.position()) as usize;

        let plaintext = envelope
            .decrypt(password.as_bytes())
            .map_err(|_| Error::Encryption)?;
        let key = Self::from_pkcs8_der(plaintext.as_bytes()).map_err(|_| Error::Encryption)?;

        Ok((key, consumed))
    }
}
