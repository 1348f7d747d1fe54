#![cfg(feature = "std")]

use dsa_keys::{
    pkcs8::{DecodePublicKey, EncodePublicKey},
    BigUint, Components, VerifyingKey,
};
use hex_literal::hex;

/// SubjectPublicKeyInfo over p = 23, q = 11, g = 2 with y = 9
const TOY_SPKI: [u8; 30] =
    hex!("301C301406072A8648CE38040130 0902011702010B020102 0304000201 09");

/// Same structure with y = 144 over p = 227, q = 113, g = 4, but with the
/// INTEGER for y missing the leading zero octet that keeps it positive
const HIGH_BIT_Y_SPKI: [u8; 31] =
    hex!("301D301506072A8648CE380401 300A 0202 00E3 0201 71 0201 04 0304000201 90");

/// Canonical form of [`HIGH_BIT_Y_SPKI`]
const HIGH_BIT_Y_SPKI_CANONICAL: [u8; 32] =
    hex!("301E301506072A8648CE380401 300A 0202 00E3 0201 71 0201 04 0305000202 0090");

/// Toy structure carrying an RSA algorithm identifier instead of DSA
const RSA_OID_SPKI: [u8; 32] =
    hex!("301E301606092A864886F70D010101 30 0902011702010B020102 0304000201 09");

/// Toy structure whose y = 5 is not a member of the order-q subgroup
const BAD_Y_SPKI: [u8; 30] =
    hex!("301C301406072A8648CE38040130 0902011702010B020102 0304000201 05");

fn toy_verifying_key() -> VerifyingKey {
    let components = Components::from_components(
        BigUint::from(23_u8),
        BigUint::from(11_u8),
        BigUint::from(2_u8),
    )
    .expect("valid components");

    VerifyingKey::from_components(components, BigUint::from(9_u8)).expect("valid key")
}

#[test]
fn encode_spki() {
    let der = toy_verifying_key().to_public_key_der().expect("SPKI encode");
    assert_eq!(der.as_bytes(), TOY_SPKI);
}

#[test]
fn decode_spki() {
    let key = VerifyingKey::from_public_key_der(&TOY_SPKI).expect("SPKI decode");

    assert_eq!(*key.y(), BigUint::from(9_u8));
    assert_eq!(*key.components().p(), BigUint::from(23_u8));
}

#[test]
fn decode_high_bit_y_without_padding() {
    // content octets of y are an unsigned magnitude even when the sign bit
    // is set; output is re-padded canonically
    let key = VerifyingKey::from_public_key_der(&HIGH_BIT_Y_SPKI).expect("SPKI decode");
    assert_eq!(*key.y(), BigUint::from(144_u8));

    let der = key.to_public_key_der().expect("SPKI encode");
    assert_eq!(der.as_bytes(), HIGH_BIT_Y_SPKI_CANONICAL);
}

#[test]
fn partial_decode_reports_consumed_length() {
    let mut bytes = TOY_SPKI.to_vec();
    bytes.extend_from_slice(b"trailing");

    // strict decoding refuses the trailing data
    assert!(VerifyingKey::from_public_key_der(&bytes).is_err());

    let (key, consumed) =
        VerifyingKey::from_public_key_der_partial(&bytes).expect("partial decode");
    assert_eq!(consumed, TOY_SPKI.len());
    assert_eq!(key, toy_verifying_key());
}

#[cfg(feature = "pem")]
#[test]
fn pem_round_trip() {
    use dsa_keys::pkcs8::LineEnding;

    let key = toy_verifying_key();
    let pem = key.to_public_key_pem(LineEnding::LF).expect("PEM encode");
    assert!(pem.starts_with("-----BEGIN PUBLIC KEY-----"));

    let decoded = VerifyingKey::from_public_key_pem(&pem).expect("PEM decode");
    assert_eq!(key, decoded);
}

#[test]
fn reject_foreign_algorithm_oid() {
    assert!(VerifyingKey::from_public_key_der(&RSA_OID_SPKI).is_err());
}

#[test]
fn reject_y_outside_subgroup() {
    assert!(VerifyingKey::from_public_key_der(&BAD_Y_SPKI).is_err());
}

#[test]
fn reject_y_out_of_range() {
    let components = Components::from_components(
        BigUint::from(23_u8),
        BigUint::from(11_u8),
        BigUint::from(2_u8),
    )
    .expect("valid components");

    assert!(VerifyingKey::from_components(components.clone(), BigUint::from(1_u8)).is_err());
    assert!(VerifyingKey::from_components(components, BigUint::from(23_u8)).is_err());
}
