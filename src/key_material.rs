//!
//! Raw byte-level representation of DSA key material
//!

use crate::Error;
use alloc::vec::Vec;
use num_bigint::BigUint;
use zeroize::Zeroizing;

/// DSA key values as raw big-endian unsigned bytes.
///
/// This is the programmatic import/export surface: `p` and `q` carry their
/// minimal encodings, while `g` and `y` are zero-padded to the length of `p`
/// and `x` to the length of `q`. All fields are interpreted as unsigned
/// magnitudes regardless of their high bit.
///
/// `y` may be omitted on import when `x` is present; it is then reconstructed
/// as `g^x mod p`. The private field is wiped when the record drops.
#[derive(Clone, PartialEq)]
#[must_use]
pub struct KeyMaterial {
    /// Prime modulus p, minimal length
    pub p: Vec<u8>,

    /// Prime divisor q of p - 1, minimal length
    pub q: Vec<u8>,

    /// Generator g, padded to the length of `p`
    pub g: Vec<u8>,

    /// Public value y, padded to the length of `p`
    pub y: Option<Vec<u8>>,

    /// Private value x, padded to the length of `q`
    pub x: Option<Zeroizing<Vec<u8>>>,
}

opaque_debug::implement!(KeyMaterial);

/// Re-encode `value` big-endian, zero-padded to exactly `width` bytes.
///
/// A value wider than `width` is an error, never a truncation. The minimal
/// intermediate encoding is wiped before returning.
pub(crate) fn to_fixed_width(value: &BigUint, width: usize) -> crate::Result<Vec<u8>> {
    let bytes = Zeroizing::new(value.to_bytes_be());
    if bytes.len() > width {
        return Err(Error::FieldLength);
    }

    let mut out = Vec::with_capacity(width);
    out.resize(width - bytes.len(), 0);
    out.extend_from_slice(&bytes);

    Ok(out)
}
