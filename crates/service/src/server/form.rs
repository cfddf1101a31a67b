//! Extraction of the `key` / `file` form fields from encrypt and decrypt
//! requests.
//!
//! Both `multipart/form-data` and `application/x-www-form-urlencoded` bodies
//! are accepted; clients commonly fall back to the latter when a form has no
//! upload in it. Any other content type is read as an empty form.

use axum::{
    async_trait,
    extract::{multipart::MultipartError, FromRequest, Multipart, Request},
    http::{header, StatusCode},
    Form,
};
use bytes::Bytes;
use common::{
    protocol::{FILE_FIELD, KEY_FIELD},
    ServiceError,
};
use tracing::debug;

use super::error::ApiError;

/// The decoded fields of an encrypt/decrypt request.
///
/// `key` stays an `Option` so an omitted field and an empty one remain
/// distinguishable. `file` is set only when the last `file` field was a
/// real upload (a multipart part carrying a filename).
#[derive(Debug, Default)]
pub struct FileForm {
    pub key: Option<String>,
    pub file: Option<Bytes>,
}

#[async_trait]
impl<S> FromRequest<S> for FileForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state).await.map_err(|e| {
                debug!(error = %e, "multipart rejected");
                ApiError(status_error(e.status()))
            })?;
            Ok(read_multipart(multipart).await?)
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(fields) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(|e| {
                    debug!(error = %e, "urlencoded form rejected");
                    ApiError(status_error(e.status()))
                })?;
            Ok(from_urlencoded(fields))
        } else {
            Ok(Self::default())
        }
    }
}

async fn read_multipart(mut multipart: Multipart) -> Result<FileForm, ServiceError> {
    let mut form = FileForm::default();
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_owned);
        let is_upload = field.file_name().is_some();
        match name.as_deref() {
            Some(KEY_FIELD) => form.key = Some(field.text().await.map_err(multipart_error)?),
            Some(FILE_FIELD) if is_upload => {
                form.file = Some(field.bytes().await.map_err(multipart_error)?)
            }
            Some(FILE_FIELD) => form.file = None,
            _ => {}
        }
    }
    Ok(form)
}

fn from_urlencoded(fields: Vec<(String, String)>) -> FileForm {
    // A urlencoded body cannot carry an upload.
    let key = fields
        .into_iter()
        .filter(|(name, _)| name == KEY_FIELD)
        .map(|(_, value)| value)
        .last();
    FileForm { key, file: None }
}

fn multipart_error(e: MultipartError) -> ServiceError {
    debug!(error = %e, "multipart field read failed");
    status_error(e.status())
}

fn status_error(status: StatusCode) -> ServiceError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        ServiceError::PayloadTooLarge
    } else {
        ServiceError::MalformedForm
    }
}
