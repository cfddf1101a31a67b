//! Service error taxonomy shared across crates.

use thiserror::Error;

/// Which file operation a request was targeting.
///
/// Only used to pick the "missing file" message, which differs per path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOp {
    /// `POST /encrypt_file`
    Encrypt,
    /// `POST /decrypt_file`
    Decrypt,
}

impl FileOp {
    fn missing_file_message(self) -> &'static str {
        match self {
            FileOp::Encrypt => "Missed file.",
            FileOp::Decrypt => "Missed encrypted file.",
        }
    }
}

/// Top-level service error type.
///
/// The `Display` text of every domain variant is the exact message callers
/// receive in the response body. Variants map to HTTP status codes:
/// - every domain variant → 400
/// - [`ServiceError::PayloadTooLarge`] → 413
/// - [`ServiceError::NotFound`] → 404
/// - [`ServiceError::Internal`] → 500
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The required `file` upload is absent.
    #[error("{}", .0.missing_file_message())]
    FileMissing(FileOp),

    /// The `key` field was omitted entirely (decrypt path only).
    #[error("Key missed.")]
    KeyMissing,

    /// The decoded key is not exactly 32 bytes.
    #[error("The key must be exactly 32 bytes long.")]
    KeyLength,

    /// The key string contains characters outside `[0-9a-fA-F]`.
    #[error("Invalid key: Non-hexadecimal digit found.")]
    InvalidKey,

    /// The envelope could not be authenticated or unframed. Deliberately
    /// carries no detail about the underlying cause.
    #[error("Failed to decrypt message")]
    DecryptionFailed,

    /// The request body could not be parsed as a form.
    #[error("Malformed form data.")]
    MalformedForm,

    /// The request body exceeds the configured upload limit.
    #[error("Uploaded file is too large.")]
    PayloadTooLarge,

    /// No route matches the request.
    #[error("The resource could not be found.")]
    NotFound,

    /// An unexpected internal fault (e.g. entropy source failure). The detail
    /// is for logs only and is never rendered to callers.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Returns the HTTP status code that should be sent for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            ServiceError::PayloadTooLarge => 413,
            ServiceError::NotFound => 404,
            ServiceError::Internal(_) => 500,
            _ => 400,
        }
    }

    /// Returns `true` for expected, caller-triggerable failures.
    pub fn is_domain(&self) -> bool {
        self.http_status() == 400
    }

    /// Short machine-readable kind, safe for logs and span fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::FileMissing(_) => "file_missing",
            ServiceError::KeyMissing => "key_missing",
            ServiceError::KeyLength => "key_length",
            ServiceError::InvalidKey => "invalid_key",
            ServiceError::DecryptionFailed => "decryption_failed",
            ServiceError::MalformedForm => "malformed_form",
            ServiceError::PayloadTooLarge => "payload_too_large",
            ServiceError::NotFound => "not_found",
            ServiceError::Internal(_) => "internal",
        }
    }

    /// Render the plain-text response body.
    ///
    /// ```text
    /// {code} {reason}\n\n{explanation}\n\n\n{message}\n\n
    /// ```
    pub fn render_body(&self) -> String {
        let (reason, explanation) = status_text(self.http_status());
        // Internal detail stays in the logs.
        let message = match self {
            ServiceError::Internal(_) => String::new(),
            other => other.to_string(),
        };
        format!(
            "{} {reason}\n\n{explanation}\n\n\n{message}\n\n",
            self.http_status()
        )
    }
}

fn status_text(status: u16) -> (&'static str, &'static str) {
    match status {
        400 => (
            "Bad Request",
            "The server could not comply with the request since it is either malformed or otherwise incorrect.",
        ),
        404 => ("Not Found", "The resource could not be found."),
        413 => (
            "Request Entity Too Large",
            "The body of your request was too large for this server.",
        ),
        _ => (
            "Internal Server Error",
            "The server has either erred or is incapable of performing the requested operation.",
        ),
    }
}
