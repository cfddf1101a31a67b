//! Axum request handlers for all service endpoints.

use axum::{
    extract::State,
    http::{header, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use common::{
    protocol::{HealthResponse, KeyResponse},
    ServiceError,
};
use tracing::info;

use super::{error::ApiError, form::FileForm, state::AppState};
use crate::crypto::{codec, codec::CodecOutput, generate_key};

/// `EncryptionKey` response header. Header names are case-insensitive and
/// `HeaderName` stores them lower-cased.
const ENCRYPTION_KEY: &str = "encryptionkey";

/// `GET /` — issue a fresh random key.
pub async fn issue_key(State(state): State<AppState>) -> Result<Json<KeyResponse>, ApiError> {
    let key = generate_key(state.random.as_ref())?;
    info!("key issued");
    Ok(Json(KeyResponse { key }))
}

/// `POST /encrypt_file` — encrypt the uploaded `file` with `key`.
pub async fn encrypt_file(
    State(state): State<AppState>,
    form: FileForm,
) -> Result<Response, ApiError> {
    let out = codec::encrypt_file(
        form.key.as_deref(),
        form.file.as_deref(),
        state.random.as_ref(),
    )?;
    info!(
        plaintext_bytes = form.file.as_ref().map_or(0, |f| f.len()),
        envelope_bytes = out.body.len(),
        "file encrypted"
    );
    file_response(out)
}

/// `POST /decrypt_file` — decrypt the uploaded envelope with `key`.
pub async fn decrypt_file(form: FileForm) -> Result<Response, ApiError> {
    let out = codec::decrypt_file(form.key.as_deref(), form.file.as_deref())?;
    info!(plaintext_bytes = out.body.len(), "file decrypted");
    file_response(out)
}

/// `GET /health` — liveness check.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
    })
}

/// Catch-all 404 handler.
pub async fn not_found() -> ApiError {
    ApiError(ServiceError::NotFound)
}

fn file_response(out: CodecOutput) -> Result<Response, ApiError> {
    // The key passed hex validation, so this only fails on a logic error.
    let key = HeaderValue::from_str(&out.encryption_key)
        .map_err(|_| ServiceError::Internal("key is not a valid header value".into()))?;
    Ok((
        StatusCode::OK,
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/octet-stream"),
            ),
            (HeaderName::from_static(ENCRYPTION_KEY), key),
        ],
        out.body,
    )
        .into_response())
}
