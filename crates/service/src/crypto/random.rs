//! Injectable cryptographically secure random source.

use aes_gcm_siv::aead::{rand_core::RngCore, OsRng};
use common::ServiceError;
use thiserror::Error;

/// The random source could not produce bytes. Never a caller error.
#[derive(Debug, Error)]
#[error("secure random source failed: {0}")]
pub struct RandomError(pub String);

impl From<RandomError> for ServiceError {
    fn from(e: RandomError) -> Self {
        ServiceError::Internal(e.to_string())
    }
}

/// Source of key and nonce material.
///
/// Handlers hold an `Arc<dyn SecureRandom>` so tests can swap in a
/// deterministic implementation.
#[cfg_attr(test, mockall::automock)]
pub trait SecureRandom: Send + Sync {
    /// Fill `dest` entirely with random bytes.
    fn fill(&self, dest: &mut [u8]) -> Result<(), RandomError>;
}

/// The operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl SecureRandom for OsRandom {
    fn fill(&self, dest: &mut [u8]) -> Result<(), RandomError> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| RandomError(e.to_string()))
    }
}
