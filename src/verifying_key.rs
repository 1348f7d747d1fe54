//!
//! Module containing the definition of the public key container
//!

use crate::{
    key_material::to_fixed_width, two, uint_from_der_integer, Components, Error, KeyMaterial, OID,
};
use num_bigint::BigUint;
use num_traits::One;
use pkcs8::{
    der::{
        asn1::{BitStringRef, UintRef},
        AnyRef, Decode, Encode, Reader, SliceReader,
    },
    spki, AlgorithmIdentifierRef, EncodePublicKey, SubjectPublicKeyInfoRef,
};

/// DSA public key
#[derive(Clone, PartialEq, PartialOrd)]
#[must_use]
pub struct VerifyingKey {
    /// common components
    components: Components,

    /// Public component y
    y: BigUint,
}

opaque_debug::implement!(VerifyingKey);

impl VerifyingKey {
    /// Construct a new public key from the common components and the public component
    ///
    /// Fails when y is out of range or not a member of the subgroup of order q
    pub fn from_components(components: Components, y: BigUint) -> signature::Result<Self> {
        if y < two()
            || y >= *components.p()
            || y.modpow(components.q(), components.p()) != BigUint::one()
        {
            return Err(signature::Error::new());
        }

        Ok(Self { components, y })
    }

    /// DSA common components
    pub const fn components(&self) -> &Components {
        &self.components
    }

    /// DSA public component
    #[must_use]
    pub const fn y(&self) -> &BigUint {
        &self.y
    }

    /// Parse a DER-encoded SubjectPublicKeyInfo from the front of `bytes`.
    ///
    /// Unlike [`DecodePublicKey`](pkcs8::DecodePublicKey), trailing data is
    /// not an error; the number of bytes consumed is returned so callers can
    /// detect it.
    pub fn from_public_key_der_partial(bytes: &[u8]) -> spki::Result<(Self, usize)> {
        let mut reader = SliceReader::new(bytes)?;
        let info = SubjectPublicKeyInfoRef::decode(&mut reader)?;
        let consumed = u32::from(reader.position()) as usize;

        Ok((Self::try_from(info)?, consumed))
    }

    /// Export the key as raw fixed-width bytes
    pub fn to_key_material(&self) -> crate::Result<KeyMaterial> {
        let p = self.components().p().to_bytes_be();
        let q = self.components().q().to_bytes_be();
        let g = to_fixed_width(self.components().g(), p.len())?;
        let y = to_fixed_width(self.y(), p.len())?;

        Ok(KeyMaterial {
            p,
            q,
            g,
            y: Some(y),
            x: None,
        })
    }

    /// Import a key from raw bytes; the public value must be present
    pub fn from_key_material(material: &KeyMaterial) -> crate::Result<Self> {
        let y_bytes = material.y.as_deref().ok_or(Error::MissingPublicValue)?;

        let components = Components::from_components(
            BigUint::from_bytes_be(&material.p),
            BigUint::from_bytes_be(&material.q),
            BigUint::from_bytes_be(&material.g),
        )?;

        Ok(Self::from_components(
            components,
            BigUint::from_bytes_be(y_bytes),
        )?)
    }
}

impl EncodePublicKey for VerifyingKey {
    fn to_public_key_der(&self) -> spki::Result<spki::Document> {
        let parameters = self.components.to_der()?;
        let parameters = AnyRef::from_der(&parameters)?;
        let algorithm = AlgorithmIdentifierRef {
            oid: OID,
            parameters: Some(parameters),
        };

        let y_bytes = self.y.to_bytes_be();
        let y = UintRef::new(&y_bytes)?;
        let public_key = y.to_der()?;

        SubjectPublicKeyInfoRef {
            algorithm,
            subject_public_key: BitStringRef::new(0, &public_key)?,
        }
        .try_into()
    }
}

impl TryFrom<SubjectPublicKeyInfoRef<'_>> for VerifyingKey {
    type Error = spki::Error;

    fn try_from(value: SubjectPublicKeyInfoRef<'_>) -> spki::Result<Self> {
        value.algorithm.assert_algorithm_oid(OID)?;

        let parameters = value.algorithm.parameters_any()?;
        let components: Components = parameters.decode_as()?;

        let y_der = value
            .subject_public_key
            .as_bytes()
            .ok_or(spki::Error::KeyMalformed)?;
        let y = uint_from_der_integer(y_der)?;

        Self::from_components(components, y).map_err(|_| spki::Error::KeyMalformed)
    }
}
