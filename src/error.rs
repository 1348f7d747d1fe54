//!
//! Error types for the concerns the ecosystem crates do not name themselves
//!

use core::fmt;
use pkcs8::{der, spki};

/// Result type specialized to this crate's [`Error`]
pub type Result<T> = core::result::Result<T, Error>;

/// Error type
#[derive(Debug)]
pub enum Error {
    /// The hash algorithm name was empty; rejected before anything is hashed
    EmptyAlgorithmName,

    /// The hash algorithm name did not match a supported digest
    UnsupportedHashAlgorithm,

    /// The password-based encryption parameter set was rejected
    /// (e.g. a zero iteration count)
    InvalidPbeParameters,

    /// Encrypted PKCS#8 processing failed.
    ///
    /// Deliberately covers wrong password, malformed envelope and
    /// unsupported scheme alike so callers cannot be used as an oracle.
    Encryption,

    /// A value does not fit the fixed-width field it must be encoded into;
    /// values are never silently truncated
    FieldLength,

    /// The scratch buffer ceiling was reached while sizing a digest
    ScratchLimit,

    /// A private value was required but not present
    MissingPrivateValue,

    /// A public value was required but not present
    MissingPublicValue,

    /// ASN.1 DER error
    Asn1(der::Error),

    /// PKCS#8 error
    Pkcs8(pkcs8::Error),

    /// SPKI public key error
    PublicKey(spki::Error),

    /// Signature provider error, passed through unchanged
    Signature(signature::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyAlgorithmName => write!(f, "hash algorithm name is empty"),
            Error::UnsupportedHashAlgorithm => write!(f, "unsupported hash algorithm"),
            Error::InvalidPbeParameters => write!(f, "invalid password-based encryption parameters"),
            Error::Encryption => write!(f, "encrypted PKCS#8 processing failed"),
            Error::FieldLength => write!(f, "value does not fit its fixed-width field"),
            Error::ScratchLimit => write!(f, "digest scratch buffer ceiling reached"),
            Error::MissingPrivateValue => write!(f, "private value x is missing"),
            Error::MissingPublicValue => write!(f, "public value y is missing"),
            Error::Asn1(err) => write!(f, "ASN.1 error: {}", err),
            Error::Pkcs8(err) => write!(f, "PKCS#8 error: {}", err),
            Error::PublicKey(err) => write!(f, "public key error: {}", err),
            Error::Signature(err) => write!(f, "signature provider error: {}", err),
        }
    }
}

impl From<der::Error> for Error {
    fn from(err: der::Error) -> Self {
        Error::Asn1(err)
    }
}

impl From<pkcs8::Error> for Error {
    fn from(err: pkcs8::Error) -> Self {
        Error::Pkcs8(err)
    }
}

impl From<spki::Error> for Error {
    fn from(err: spki::Error) -> Self {
        Error::PublicKey(err)
    }
}

impl From<signature::Error> for Error {
    fn from(err: signature::Error) -> Self {
        Error::Signature(err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Asn1(err) => Some(err),
            Error::Pkcs8(err) => Some(err),
            Error::PublicKey(err) => Some(err),
            Error::Signature(err) => Some(err),
            _ => None,
        }
    }
}
