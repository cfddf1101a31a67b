//! Common types, protocol definitions, and errors shared across `file-enc-svc` crates.

pub mod error;
pub mod protocol;

pub use error::{FileOp, ServiceError};
