#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]
#![doc = include_str!("../README.md")]

//!
//! # Examples
//!
//! Import a key from its raw values and round-trip it through PKCS#8
//!
//! ```
//! use dsa_keys::{BigUint, Components, SigningKey, VerifyingKey};
//! use dsa_keys::pkcs8::{DecodePrivateKey, EncodePrivateKey};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Toy parameters; real keys use NIST-sized primes
//! let components = Components::from_components(
//!     BigUint::from(23_u8),
//!     BigUint::from(11_u8),
//!     BigUint::from(2_u8),
//! )?;
//! let verifying_key = VerifyingKey::from_components(components, BigUint::from(9_u8))?;
//! let signing_key = SigningKey::from_components(verifying_key, BigUint::from(5_u8))?;
//!
//! let der = signing_key.to_pkcs8_der()?;
//! let decoded = SigningKey::from_pkcs8_der(der.as_bytes())?;
//! assert_eq!(signing_key, decoded);
//! # Ok(()) }
//! ```

extern crate alloc;

pub use crate::{
    components::Components,
    error::{Error, Result},
    hash::HashAlgorithm,
    key_material::KeyMaterial,
    sign::{hash_data, try_hash_data, DataSigner, DataVerifier},
    signing_key::SigningKey,
    verifying_key::VerifyingKey,
};

#[cfg(feature = "encryption")]
pub use crate::encrypted::{Password, PbeCipher, PbeParameters};

pub use num_bigint::BigUint;
pub use pkcs8;
pub use signature;

use pkcs8::{
    der::{self, asn1::AnyRef, Decode, Tag, Tagged},
    spki::ObjectIdentifier,
};

mod components;
#[cfg(feature = "encryption")]
mod encrypted;
mod error;
mod hash;
mod key_material;
mod sign;
mod signing_key;
mod verifying_key;

/// DSA object identifier as defined by [RFC3279 § 2.3.2].
///
/// [RFC3279 2.3.2]: https://www.rfc-editor.org/rfc/rfc3279#section-2.3.2
pub const OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10040.4.1");

/// Returns a `BigUint` with the value 2
#[inline]
fn two() -> BigUint {
    BigUint::from(2_u8)
}

/// Decode a DER INTEGER as an unsigned value even when its sign bit is set.
///
/// Some encoders emit X or Y without the leading zero octet that keeps a
/// high-bit value positive in strict DER; the content octets are taken as a
/// big-endian magnitude either way. Output produced by this crate is always
/// correctly padded.
fn uint_from_der_integer(bytes: &[u8]) -> der::Result<BigUint> {
    let any = AnyRef::from_der(bytes)?;
    any.tag().assert_eq(Tag::Integer)?;

    Ok(BigUint::from_bytes_be(any.value()))
}
