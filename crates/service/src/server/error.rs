//! Rendering of [`ServiceError`] as an HTTP response.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use common::ServiceError;
use tracing::{debug, error};

use crate::crypto::random::RandomError;

/// Axum-facing wrapper so handlers can return `Result<_, ApiError>` and use
/// `?` on any [`ServiceError`].
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        Self(e)
    }
}

impl From<RandomError> for ApiError {
    fn from(e: RandomError) -> Self {
        Self(e.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(error = %self.0, "request failed");
        } else {
            debug!(kind = self.0.kind(), status = status.as_u16(), "request rejected");
        }

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=UTF-8")],
            self.0.render_body(),
        )
            .into_response()
    }
}
