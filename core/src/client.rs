//! Stateless request builder and response parser for the todo service.
//!
//! # Design
//! `TodoClient` holds only a `base_url`. Each operation is a `build_*`
//! method producing an `HttpRequest` and a `parse_*` method consuming the
//! matching `HttpResponse`; the caller does the I/O in between.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, ErrorBody, Success, Todo};

const EMPTY_BODY_MESSAGE: &str = "Todo body cannot be empty";

/// Synchronous, stateless client for the todo service.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/api/todos", self.base_url)
    }

    /// Ids are inserted verbatim; the service validates them.
    fn item_url(&self, id: &str) -> String {
        format!("{}/api/todos/{id}", self.base_url)
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.collection_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.collection_url(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// Marks a todo completed. There is no way to un-complete one.
    pub fn build_complete_todo(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Patch,
            url: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_delete_todo(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 201)?;
        decode(&response.body)
    }

    /// Succeeds even when no todo had that id; the service does not check.
    pub fn parse_complete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        parse_success(response)
    }

    /// Succeeds even when no todo had that id; the service does not check.
    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        parse_success(response)
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

fn parse_success(response: HttpResponse) -> Result<(), ApiError> {
    check_status(&response, 200)?;
    let ack: Success = decode(&response.body)?;
    if ack.success {
        Ok(())
    } else {
        Err(ApiError::NotAcknowledged)
    }
}

/// Map a non-expected status to the matching `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    match serde_json::from_str::<ErrorBody>(&response.body) {
        Ok(err) if response.status == 404 && err.error == EMPTY_BODY_MESSAGE => {
            Err(ApiError::EmptyBody)
        }
        Ok(err) => Err(ApiError::Service {
            status: response.status,
            message: err.error,
        }),
        Err(_) => Err(ApiError::HttpError {
            status: response.status,
            body: response.body.clone(),
        }),
    }
}
