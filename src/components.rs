//!
//! Module containing the definition of the common components container
//!

use crate::two;
use num_bigint::BigUint;
use num_traits::One;
use pkcs8::der::{
    self, asn1::UintRef, DecodeValue, Encode, EncodeValue, Header, Length, Reader, Sequence,
    Writer,
};

/// The common components of a DSA keypair
///
/// (the prime p, quotient q and generator g), encoded as the `Dss-Parms`
/// ASN.1 structure when used inside an algorithm identifier
#[derive(Clone, PartialEq, PartialOrd)]
#[must_use]
pub struct Components {
    /// Prime p
    p: BigUint,

    /// Quotient q
    q: BigUint,

    /// Generator g
    g: BigUint,
}

opaque_debug::implement!(Components);

impl Components {
    /// Construct the common components container from its inner values (p, q and g)
    pub fn from_components(p: BigUint, q: BigUint, g: BigUint) -> signature::Result<Self> {
        let components = Self { p, q, g };
        if !components.is_valid() {
            return Err(signature::Error::new());
        }

        Ok(components)
    }

    /// DSA prime p
    #[must_use]
    pub const fn p(&self) -> &BigUint {
        &self.p
    }

    /// DSA quotient q
    #[must_use]
    pub const fn q(&self) -> &BigUint {
        &self.q
    }

    /// DSA generator g
    #[must_use]
    pub const fn g(&self) -> &BigUint {
        &self.g
    }

    /// Check whether the components are valid
    #[must_use]
    pub fn is_valid(&self) -> bool {
        *self.p() >= two()
            && *self.q() >= two()
            && *self.g() >= BigUint::one()
            && self.g() < self.p()
    }
}

impl<'a> DecodeValue<'a> for Components {
    fn decode_value<R: Reader<'a>>(reader: &mut R, _header: Header) -> der::Result<Self> {
        let p = reader.decode::<UintRef<'_>>()?;
        let q = reader.decode::<UintRef<'_>>()?;
        let g = reader.decode::<UintRef<'_>>()?;

        let p = BigUint::from_bytes_be(p.as_bytes());
        let q = BigUint::from_bytes_be(q.as_bytes());
        let g = BigUint::from_bytes_be(g.as_bytes());

        Self::from_components(p, q, g).map_err(|_| der::Tag::Integer.value_error())
    }
}

impl EncodeValue for Components {
    fn value_len(&self) -> der::Result<Length> {
        let p_bytes = self.p.to_bytes_be();
        let q_bytes = self.q.to_bytes_be();
        let g_bytes = self.g.to_bytes_be();

        let len = (UintRef::new(&p_bytes)?.encoded_len()? + UintRef::new(&q_bytes)?.encoded_len()?)?;
        len + UintRef::new(&g_bytes)?.encoded_len()?
    }

    fn encode_value(&self, writer: &mut impl Writer) -> der::Result<()> {
        let p_bytes = self.p.to_bytes_be();
        let q_bytes = self.q.to_bytes_be();
        let g_bytes = self.g.to_bytes_be();

        UintRef::new(&p_bytes)?.encode(writer)?;
        UintRef::new(&q_bytes)?.encode(writer)?;
        UintRef::new(&g_bytes)?.encode(writer)?;

        Ok(())
    }
}

impl<'a> Sequence<'a> for Components {}
