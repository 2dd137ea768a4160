//! Errors a request handler can return, and how each one is rendered.
//!
//! Only the empty-body rejection has a dedicated status. Everything else is
//! a propagated failure and goes out as a 500 with the error's message, the
//! same shape clients of the service already handle.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mongodb::bson::oid;
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

pub const EMPTY_BODY_MESSAGE: &str = "Todo body cannot be empty";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{}", EMPTY_BODY_MESSAGE)]
    EmptyBody,

    #[error("invalid JSON payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    #[error("invalid todo id {id:?}: {source}")]
    InvalidId {
        id: String,
        #[source]
        source: oid::Error,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            // Kept at 404 for compatibility with existing clients.
            ApiError::EmptyBody => StatusCode::NOT_FOUND,
            ApiError::InvalidPayload(_) | ApiError::InvalidId { .. } | ApiError::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "request rejected");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
