//! Limits enforced by the middleware layers applied to the router.

use std::time::Duration;

use crate::config::Config;

/// Default per-request timeout applied to all routes.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Default cap on request body size, multipart framing included.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Request limits applied by [`super::router::build`].
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    pub max_upload_bytes: usize,
    pub request_timeout: Duration,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_upload_bytes: MAX_UPLOAD_BYTES,
            request_timeout: REQUEST_TIMEOUT,
        }
    }
}

impl From<&Config> for Limits {
    fn from(cfg: &Config) -> Self {
        Self {
            max_upload_bytes: cfg.max_upload_bytes,
            request_timeout: Duration::from_secs(cfg.request_timeout_secs),
        }
    }
}
