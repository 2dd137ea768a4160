//! Errors returned by `TodoClient` parse and build methods.
//!
//! # Design
//! The service answers an empty todo body with a 404 carrying a fixed
//! message; that case gets its own variant so callers do not mistake it for
//! a missing resource. Other JSON error envelopes land in `Service`, and
//! anything else non-successful in `HttpError` with the raw body.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The service rejected a create because the body text was empty.
    #[error("todo body cannot be empty")]
    EmptyBody,

    /// The service reported a failure in its `{"error": ...}` envelope.
    #[error("service error (HTTP {status}): {message}")]
    Service { status: u16, message: String },

    /// Unexpected status without a recognizable error envelope.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// A success response carried `{"success": false}`.
    #[error("service did not acknowledge the operation")]
    NotAcknowledged,

    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    #[error("serialization failed: {0}")]
    SerializationError(String),
}
