use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};

use crate::error::ApiError;
use crate::model::{CreateTodo, SuccessResponse, Todo, TodoId};
use crate::store::SharedStore;

pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/{id}", patch(complete_todo).delete(delete_todo))
        .with_state(store)
}

fn parse_id(raw: String) -> Result<TodoId, ApiError> {
    raw.parse()
        .map_err(|source| ApiError::InvalidId { id: raw, source })
}

async fn list_todos(State(store): State<SharedStore>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = store.list().await?;
    Ok(Json(todos))
}

// The payload is parsed by hand so a missing content type or bad JSON is
// reported through `ApiError` rather than axum's own rejection statuses.
async fn create_todo(
    State(store): State<SharedStore>,
    payload: Bytes,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let input = CreateTodo::from_slice(&payload)?;
    let body = input.into_body();
    if body.is_empty() {
        return Err(ApiError::EmptyBody);
    }

    let todo = store.insert(body).await?;
    if let Some(id) = &todo.id {
        tracing::info!(%id, "created todo");
    }
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn complete_todo(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let id = parse_id(id)?;
    let matched = store.mark_completed(id).await?;
    tracing::info!(%id, matched, "marked todo completed");
    Ok(Json(SuccessResponse::ok()))
}

async fn delete_todo(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let id = parse_id(id)?;
    let deleted = store.delete(id).await?;
    tracing::info!(%id, deleted, "deleted todo");
    Ok(Json(SuccessResponse::ok()))
}
