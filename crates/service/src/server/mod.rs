//! Axum HTTP server, routing, and middleware.
//!
//! # Responsibilities
//! - Define the Axum router with all routes and shared middleware.
//! - Decode `key` / `file` form fields and hand them to [`crate::crypto::codec`].
//! - Render [`common::ServiceError`] with the fixed plain-text body template.

pub mod error;
pub mod form;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
