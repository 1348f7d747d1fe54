//!
//! Module containing the definition of the private key container
//!

use crate::{
    key_material::to_fixed_width, uint_from_der_integer, Components, Error, KeyMaterial,
    VerifyingKey, OID,
};
use num_bigint::BigUint;
use num_traits::Zero;
use pkcs8::{
    der::{asn1::UintRef, AnyRef, Decode, Encode, Reader, SliceReader},
    AlgorithmIdentifierRef, EncodePrivateKey, PrivateKeyInfo, SecretDocument,
};
use zeroize::Zeroizing;

/// DSA private key.
///
/// Owns the private component x alongside its public half. Transient
/// buffers carrying x are wiped on every exit path, success or failure.
#[derive(Clone, PartialEq)]
#[must_use]
pub struct SigningKey {
    /// Public key
    verifying_key: VerifyingKey,

    /// Private component x
    x: Zeroizing<BigUint>,
}

opaque_debug::implement!(SigningKey);

impl SigningKey {
    /// Construct a new private key from the public key and private component
    pub fn from_components(verifying_key: VerifyingKey, x: BigUint) -> signature::Result<Self> {
        if x.is_zero() || x >= *verifying_key.components().q() {
            return Err(signature::Error::new());
        }

        Ok(Self {
            verifying_key,
            x: Zeroizing::new(x),
        })
    }

    /// DSA public key
    pub const fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    /// DSA private component
    ///
    /// If you decide to clone this value, please consider using
    /// [`Zeroize::zeroize`](::zeroize::Zeroize::zeroize()) to zero out the
    /// memory after you're done using the clone
    #[must_use]
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    /// Parse a DER-encoded PKCS#8 private key from the front of `bytes`.
    ///
    /// Unlike [`DecodePrivateKey`](pkcs8::DecodePrivateKey), trailing data is
    /// not an error; the number of bytes consumed is returned so callers can
    /// detect it.
    pub fn from_pkcs8_der_partial(bytes: &[u8]) -> pkcs8::Result<(Self, usize)> {
        let mut reader = SliceReader::new(bytes)?;
        let info = PrivateKeyInfo::decode(&mut reader)?;
        let consumed = u32::from(reader.position()) as usize;

        Ok((Self::try_from(info)?, consumed))
    }

    /// Export the key as raw fixed-width bytes, private component included
    pub fn to_key_material(&self) -> crate::Result<KeyMaterial> {
        let mut material = self.verifying_key().to_key_material()?;
        let q_len = material.q.len();
        material.x = Some(Zeroizing::new(to_fixed_width(self.x(), q_len)?));

        Ok(material)
    }

    /// Import a key from raw bytes.
    ///
    /// The private value must be present; the public value is reconstructed
    /// as `g^x mod p` when absent.
    pub fn from_key_material(material: &KeyMaterial) -> crate::Result<Self> {
        let x_bytes = material.x.as_ref().ok_or(Error::MissingPrivateValue)?;

        let components = Components::from_components(
            BigUint::from_bytes_be(&material.p),
            BigUint::from_bytes_be(&material.q),
            BigUint::from_bytes_be(&material.g),
        )?;

        let x = BigUint::from_bytes_be(x_bytes);
        let y = match material.y.as_deref() {
            Some(y_bytes) => BigUint::from_bytes_be(y_bytes),
            None => components.g().modpow(&x, components.p()),
        };

        let verifying_key = VerifyingKey::from_components(components, y)?;

        Ok(Self::from_components(verifying_key, x)?)
    }
}

impl EncodePrivateKey for SigningKey {
    fn to_pkcs8_der(&self) -> pkcs8::Result<SecretDocument> {
        let parameters = self.verifying_key().components().to_der()?;
        let parameters = AnyRef::from_der(&parameters)?;
        let algorithm = AlgorithmIdentifierRef {
            oid: OID,
            parameters: Some(parameters),
        };

        // x transits two temporary buffers; both are wiped however we leave
        let x_bytes = Zeroizing::new(self.x.to_bytes_be());
        let x = UintRef::new(&x_bytes)?;
        let private_key = Zeroizing::new(x.to_der()?);

        PrivateKeyInfo::new(algorithm, &private_key).try_into()
    }
}

impl TryFrom<PrivateKeyInfo<'_>> for SigningKey {
    type Error = pkcs8::Error;

    fn try_from(value: PrivateKeyInfo<'_>) -> pkcs8::Result<Self> {
        value.algorithm.assert_algorithm_oid(OID)?;

        let parameters = value.algorithm.parameters_any()?;
        let components: Components = parameters.decode_as()?;

        let x = uint_from_der_integer(value.private_key)?;

        let y = match value.public_key {
            Some(y_bytes) => uint_from_der_integer(y_bytes)?,
            None => components.g().modpow(&x, components.p()),
        };

        let verifying_key = VerifyingKey::from_components(components, y)
            .map_err(|_| pkcs8::Error::KeyMalformed)?;

        Self::from_components(verifying_key, x).map_err(|_| pkcs8::Error::KeyMalformed)
    }
}
