//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use crate::crypto::{OsRandom, SecureRandom};

/// Application state shared across all request handlers.
///
/// Holds no request data; the only shared piece is the random source used
/// for key issuance and nonces.
#[derive(Clone)]
pub struct AppState {
    pub random: Arc<dyn SecureRandom>,
}

impl AppState {
    /// Create a new [`AppState`] drawing randomness from `random`.
    pub fn new(random: Arc<dyn SecureRandom>) -> Self {
        Self { random }
    }
}

impl Default for AppState {
    /// Backed by the OS CSPRNG.
    fn default() -> Self {
        Self::new(Arc::new(OsRandom))
    }
}
