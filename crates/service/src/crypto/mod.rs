//! Key issuance and AES-256-GCM-SIV file encryption.
//!
//! This module is free of HTTP dependencies. Handlers pass in the decoded
//! `key` and `file` form fields and get back bytes or a [`common::ServiceError`].
//!
//! # Envelope format
//!
//! ```text
//! nonce (12 bytes) || ciphertext || tag (16 bytes)
//! ```

pub mod cipher;
pub mod codec;
pub mod key;
pub mod random;

pub use key::generate_key;
pub use random::{OsRandom, SecureRandom};
