//! Request and response types exchanged with callers.

use serde::{Deserialize, Serialize};

/// Name of the response header echoing the caller's hex key on every
/// successful encrypt/decrypt response.
pub const ENCRYPTION_KEY_HEADER: &str = "EncryptionKey";

/// Form field carrying the hex-encoded key.
pub const KEY_FIELD: &str = "key";

/// Form field carrying the uploaded file.
pub const FILE_FIELD: &str = "file";

// ---------------------------------------------------------------------------
// Key issuance
// ---------------------------------------------------------------------------

/// Response body for `GET /`. Exactly one field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyResponse {
    /// Freshly generated 64-character lowercase hex key.
    pub key: String,
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

/// Response body for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process is serving.
    pub status: String,
}
