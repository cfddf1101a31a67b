//! AES-256-GCM-SIV encryption and decryption of whole file payloads.
//!
//! **Algorithm choice:** AES-256-GCM-SIV (RFC 8452) is nonce-misuse-resistant,
//! so an accidental nonce repeat leaks only plaintext equality rather than
//! the authentication key. A fresh random 96-bit nonce is still drawn per
//! call, which makes repeated encryption of the same file non-deterministic.

use aes_gcm_siv::{
    aead::{Aead, KeyInit},
    Aes256GcmSiv, Nonce,
};
use common::ServiceError;

use super::key::RawKey;
use super::random::SecureRandom;

/// Byte length of an AES-GCM-SIV nonce (12 bytes = 96 bits).
pub const NONCE_LEN: usize = 12;

/// Byte length of the authentication tag appended to the ciphertext.
pub const TAG_LEN: usize = 16;

/// A parsed encrypted payload.
///
/// The byte representation is `nonce || ciphertext || tag`, with no header
/// and no padding. The smallest valid envelope is `NONCE_LEN + TAG_LEN` bytes
/// (an encrypted empty file).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedEnvelope {
    /// Raw nonce bytes.
    pub nonce: [u8; NONCE_LEN],
    /// Raw ciphertext + authentication tag bytes.
    pub ciphertext: Vec<u8>,
}

impl EncryptedEnvelope {
    /// Encode this envelope to its wire bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(NONCE_LEN + self.ciphertext.len());
        out.extend_from_slice(&self.nonce);
        out.extend_from_slice(&self.ciphertext);
        out
    }

    /// Split wire bytes back into nonce and ciphertext.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::DecryptionFailed`] if `bytes` is too short to
    /// hold a nonce and a tag.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ServiceError> {
        if bytes.len() < NONCE_LEN + TAG_LEN {
            return Err(ServiceError::DecryptionFailed);
        }
        let (nonce_bytes, ciphertext) = bytes.split_at(NONCE_LEN);
        let mut nonce = [0u8; NONCE_LEN];
        nonce.copy_from_slice(nonce_bytes);
        Ok(Self {
            nonce,
            ciphertext: ciphertext.to_vec(),
        })
    }
}

/// Encrypt `plaintext` under `key` with a nonce drawn from `rng`.
///
/// # Errors
///
/// Returns [`ServiceError::Internal`] if the random source fails. A valid
/// [`RawKey`] never causes an error.
pub fn encrypt(
    plaintext: &[u8],
    key: &RawKey,
    rng: &dyn SecureRandom,
) -> Result<EncryptedEnvelope, ServiceError> {
    let cipher = build_cipher(key)?;

    let mut nonce = [0u8; NONCE_LEN];
    rng.fill(&mut nonce)?;

    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce), plaintext)
        .map_err(|_| ServiceError::Internal("aead encryption failed".into()))?;

    Ok(EncryptedEnvelope { nonce, ciphertext })
}

/// Decrypt an [`EncryptedEnvelope`] back to plaintext bytes.
///
/// # Errors
///
/// Returns [`ServiceError::DecryptionFailed`] if authentication fails, for
/// whatever reason (wrong key, tampered data, not a ciphertext at all).
pub fn decrypt(envelope: &EncryptedEnvelope, key: &RawKey) -> Result<Vec<u8>, ServiceError> {
    let cipher = build_cipher(key)?;
    cipher
        .decrypt(Nonce::from_slice(&envelope.nonce), envelope.ciphertext.as_ref())
        .map_err(|_| ServiceError::DecryptionFailed)
}

fn build_cipher(key: &RawKey) -> Result<Aes256GcmSiv, ServiceError> {
    Aes256GcmSiv::new_from_slice(key.as_bytes())
        .map_err(|_| ServiceError::Internal("cipher rejected a validated key".into()))
}
