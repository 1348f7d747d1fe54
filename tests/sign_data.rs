#![cfg(feature = "std")]

//! Hash-then-sign orchestration, exercised through a stub provider that
//! tags digests with an HMAC-like construction instead of real DSA math.

use dsa_keys::{
    hash_data, try_hash_data, DataSigner, DataVerifier, Error, HashAlgorithm,
};
use hex_literal::hex;
use sha2::{Digest, Sha256};
use signature::{
    hazmat::{PrehashSigner, PrehashVerifier},
    SignatureEncoding,
};

const SHA1_ABC: [u8; 20] = hex!("A9993E364706816ABA3E25717850C26C9CD0D89D");
const SHA256_ABC: [u8; 32] =
    hex!("BA7816BF8F01CFEA414140DE5DAE2223B00361A396177A9CB410FF61F20015AD");

#[derive(Clone, Debug, PartialEq, Eq)]
struct StubSignature(Vec<u8>);

impl From<StubSignature> for Vec<u8> {
    fn from(signature: StubSignature) -> Vec<u8> {
        signature.0
    }
}

impl TryFrom<&[u8]> for StubSignature {
    type Error = signature::Error;

    fn try_from(bytes: &[u8]) -> signature::Result<Self> {
        Ok(Self(bytes.to_vec()))
    }
}

impl SignatureEncoding for StubSignature {
    type Repr = Vec<u8>;
}

/// Deterministic stand-in for a DSA provider: the "signature" over a digest
/// is SHA-256(key || digest)
struct StubProvider {
    key: [u8; 16],
}

impl PrehashSigner<StubSignature> for StubProvider {
    fn sign_prehash(&self, prehash: &[u8]) -> signature::Result<StubSignature> {
        let mut hasher = Sha256::new();
        hasher.update(self.key);
        hasher.update(prehash);

        Ok(StubSignature(hasher.finalize().to_vec()))
    }
}

impl PrehashVerifier<StubSignature> for StubProvider {
    fn verify_prehash(&self, prehash: &[u8], signature: &StubSignature) -> signature::Result<()> {
        if self.sign_prehash(prehash)? == *signature {
            Ok(())
        } else {
            Err(signature::Error::new())
        }
    }
}

fn provider() -> StubProvider {
    StubProvider { key: *b"0123456789ABCDEF" }
}

#[test]
fn hash_data_known_vectors() {
    assert_eq!(hash_data(b"abc", HashAlgorithm::Sha1), SHA1_ABC);
    assert_eq!(hash_data(b"abc", HashAlgorithm::Sha256), SHA256_ABC);
}

#[test]
fn try_hash_data_fills_destination() {
    let mut dest = [0u8; 64];
    let written = try_hash_data(b"abc", HashAlgorithm::Sha256, &mut dest).expect("hash");

    assert_eq!(written, Some(32));
    assert_eq!(dest[..32], SHA256_ABC);
}

#[test]
fn try_hash_data_leaves_short_destination_untouched() {
    let mut dest = [0xAAu8; 31];
    let written = try_hash_data(b"abc", HashAlgorithm::Sha256, &mut dest).expect("hash");

    assert_eq!(written, None);
    assert_eq!(dest, [0xAAu8; 31]);
}

#[test]
fn sign_then_verify() {
    let provider = provider();
    let signature: StubSignature = provider
        .sign_data(b"hello world", HashAlgorithm::Sha256)
        .expect("sign");

    assert!(provider
        .verify_data(b"hello world", HashAlgorithm::Sha256, &signature)
        .expect("verify"));
}

#[test]
fn verify_rejects_tampered_data() {
    let provider = provider();
    let signature: StubSignature = provider
        .sign_data(b"hello world", HashAlgorithm::Sha256)
        .expect("sign");

    // provider rejection is a clean false, not an error
    assert!(!provider
        .verify_data(b"hello worle", HashAlgorithm::Sha256, &signature)
        .expect("verify"));
}

#[test]
fn verify_rejects_tampered_signature() {
    let provider = provider();
    let signature: StubSignature = provider
        .sign_data(b"hello world", HashAlgorithm::Sha256)
        .expect("sign");

    let mut bytes = signature.to_vec();
    bytes[0] ^= 1;
    let tampered = StubSignature::try_from(bytes.as_slice()).expect("stub");

    assert!(!provider
        .verify_data(b"hello world", HashAlgorithm::Sha256, &tampered)
        .expect("verify"));
}

#[test]
fn verify_detects_algorithm_mismatch() {
    let provider = provider();
    let signature: StubSignature = provider
        .sign_data(b"hello world", HashAlgorithm::Sha256)
        .expect("sign");

    assert!(!provider
        .verify_data(b"hello world", HashAlgorithm::Sha384, &signature)
        .expect("verify"));
}

#[test]
fn try_sign_data_exact_fit() {
    let provider = provider();
    let mut dest = [0u8; 32];

    let written =
        DataSigner::<StubSignature>::try_sign_data(&provider, b"abc", HashAlgorithm::Sha1, &mut dest)
            .expect("sign");
    assert_eq!(written, Some(32));

    let signature = StubSignature::try_from(&dest[..]).expect("stub");
    assert!(provider
        .try_verify_data(b"abc", HashAlgorithm::Sha1, &signature)
        .expect("verify"));
}

#[test]
fn try_sign_data_leaves_short_destination_untouched() {
    let provider = provider();
    let mut dest = [0xAAu8; 31];

    let written =
        DataSigner::<StubSignature>::try_sign_data(&provider, b"abc", HashAlgorithm::Sha1, &mut dest)
            .expect("sign");

    assert_eq!(written, None);
    assert_eq!(dest, [0xAAu8; 31]);
}

#[test]
fn algorithm_lookup_by_name() {
    assert_eq!(HashAlgorithm::new("SHA-256").expect("lookup"), HashAlgorithm::Sha256);
    assert_eq!(HashAlgorithm::new("SHA256").expect("lookup"), HashAlgorithm::Sha256);
    assert_eq!(HashAlgorithm::new("sha1").expect("lookup"), HashAlgorithm::Sha1);
    assert_eq!("SHA-512".parse::<HashAlgorithm>().expect("parse"), HashAlgorithm::Sha512);
}

#[test]
fn algorithm_lookup_rejects_empty_name() {
    let err = HashAlgorithm::new("").expect_err("empty name");
    assert!(matches!(err, Error::EmptyAlgorithmName));
}

#[test]
fn algorithm_lookup_rejects_unknown_name() {
    let err = HashAlgorithm::new("MD5").expect_err("unsupported digest");
    assert!(matches!(err, Error::UnsupportedHashAlgorithm));
}

#[test]
fn algorithm_metadata() {
    assert_eq!(HashAlgorithm::Sha1.output_size(), 20);
    assert_eq!(HashAlgorithm::Sha224.output_size(), 28);
    assert_eq!(HashAlgorithm::Sha256.output_size(), 32);
    assert_eq!(HashAlgorithm::Sha384.output_size(), 48);
    assert_eq!(HashAlgorithm::Sha512.output_size(), 64);
    assert_eq!(HashAlgorithm::Sha256.to_string(), "SHA-256");
}
