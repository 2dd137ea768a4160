//! Wire DTOs for the todo service.
//!
//! # Design
//! Defined independently of the server crate so the client has no axum or
//! MongoDB dependency. Ids stay opaque strings here; the integration test
//! catches any drift between the two schemas.

use serde::{Deserialize, Serialize};

/// A todo as the service returns it. The service leaves `_id` out when a
/// record has none.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub completed: bool,
    pub body: String,
}

/// Request payload for creating a todo. New todos always start incomplete,
/// so there is nothing else to send.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub body: String,
}

/// Acknowledgement returned by complete and delete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Success {
    pub success: bool,
}

/// Error envelope the service uses for every failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}
