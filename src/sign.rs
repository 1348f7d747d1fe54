//!
//! Hashing orchestration for data signing and verification.
//!
//! The DSA arithmetic itself lives behind the [`PrehashSigner`] and
//! [`PrehashVerifier`] capability traits; one implementer per platform or
//! provider. Everything here reduces arbitrary-length input to a digest and
//! moves bytes, so it is implemented once, generically.
//!

use crate::{Error, HashAlgorithm, Result};
use alloc::vec;
use alloc::vec::Vec;
use signature::{
    hazmat::{PrehashSigner, PrehashVerifier},
    SignatureEncoding,
};
use zeroize::Zeroizing;

/// First scratch buffer size tried when hashing for a bounded-output call
const SCRATCH_INITIAL_LEN: usize = 64;

/// Hard ceiling for scratch growth; a hash collaborator claiming a digest
/// larger than this is refused rather than allocated for
const MAX_SCRATCH_LEN: usize = 1 << 22;

/// Hash `data` with the given algorithm, allocating the digest
#[must_use]
pub fn hash_data(data: &[u8], algorithm: HashAlgorithm) -> Vec<u8> {
    algorithm.digest_data(data)
}

/// Hash `data` into a bounded destination buffer.
///
/// Returns `Ok(None)` when `dest` cannot hold the digest, leaving `dest`
/// untouched so the caller can retry with a larger buffer.
pub fn try_hash_data(
    data: &[u8],
    algorithm: HashAlgorithm,
    dest: &mut [u8],
) -> Result<Option<usize>> {
    let digest = hash_scratch(data, algorithm)?;
    if digest.len() > dest.len() {
        return Ok(None);
    }

    dest[..digest.len()].copy_from_slice(&digest);
    Ok(Some(digest.len()))
}

/// Digest through a zeroed-on-drop scratch buffer of initially unknown size.
///
/// The buffer doubles until the digest fits, capped at [`MAX_SCRATCH_LEN`];
/// every discarded attempt is wiped when it drops.
fn hash_scratch(data: &[u8], algorithm: HashAlgorithm) -> Result<Zeroizing<Vec<u8>>> {
    let mut len = SCRATCH_INITIAL_LEN;

    loop {
        let mut scratch = Zeroizing::new(vec![0u8; len]);
        if let Some(written) = algorithm.digest_into(data, &mut scratch) {
            scratch.truncate(written);
            return Ok(scratch);
        }

        if len >= MAX_SCRATCH_LEN {
            return Err(Error::ScratchLimit);
        }
        len *= 2;
    }
}

/// Hash-then-sign over arbitrary-length input.
///
/// Blanket-implemented for every [`PrehashSigner`], so a provider only has
/// to implement the digest-level primitive.
pub trait DataSigner<S> {
    /// Hash `data` and sign the digest, allocating the signature
    fn sign_data(&self, data: &[u8], algorithm: HashAlgorithm) -> Result<S>;

    /// Hash `data` and sign the digest into a bounded destination buffer.
    ///
    /// Returns `Ok(None)` when `dest` cannot hold the encoded signature,
    /// leaving `dest` untouched.
    fn try_sign_data(
        &self,
        data: &[u8],
        algorithm: HashAlgorithm,
        dest: &mut [u8],
    ) -> Result<Option<usize>>;
}

impl<S, T> DataSigner<S> for T
where
    T: PrehashSigner<S>,
    S: SignatureEncoding,
{
    fn sign_data(&self, data: &[u8], algorithm: HashAlgorithm) -> Result<S> {
        let digest = algorithm.digest_data(data);

        self.sign_prehash(&digest).map_err(Error::Signature)
    }

    fn try_sign_data(
        &self,
        data: &[u8],
        algorithm: HashAlgorithm,
        dest: &mut [u8],
    ) -> Result<Option<usize>> {
        let digest = hash_scratch(data, algorithm)?;
        let signature = self.sign_prehash(&digest).map_err(Error::Signature)?;

        let encoded = signature.to_vec();
        if encoded.len() > dest.len() {
            return Ok(None);
        }

        dest[..encoded.len()].copy_from_slice(&encoded);
        Ok(Some(encoded.len()))
    }
}

/// Hash-then-verify over arbitrary-length input.
///
/// Blanket-implemented for every [`PrehashVerifier`].
pub trait DataVerifier<S> {
    /// Hash `data` and check `signature` against the digest.
    ///
    /// Provider rejection comes back as `Ok(false)`; only argument and
    /// hashing problems surface as errors.
    fn verify_data(&self, data: &[u8], algorithm: HashAlgorithm, signature: &S) -> Result<bool>;

    /// Same check, hashing through the bounded scratch path
    fn try_verify_data(
        &self,
        data: &[u8],
        algorithm: HashAlgorithm,
        signature: &S,
    ) -> Result<bool>;
}

impl<S, T> DataVerifier<S> for T
where
    T: PrehashVerifier<S>,
{
    fn verify_data(&self, data: &[u8], algorithm: HashAlgorithm, signature: &S) -> Result<bool> {
        let digest = algorithm.digest_data(data);

        Ok(self.verify_prehash(&digest, signature).is_ok())
    }

    fn try_verify_data(
        &self,
        data: &[u8],
        algorithm: HashAlgorithm,
        signature: &S,
    ) -> Result<bool> {
        let digest = hash_scratch(data, algorithm)?;

        Ok(self.verify_prehash(&digest, signature).is_ok())
    }
}
