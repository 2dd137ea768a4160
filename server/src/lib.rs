//! HTTP service exposing CRUD over a MongoDB `todos` collection.
//!
//! # Overview
//! Four routes under `/api/todos` (list, create, complete, delete). Each
//! handler does one single-document store operation and answers with JSON.
//!
//! # Design
//! - The store is injected as an `Arc<dyn TodoStore>`, so the router runs
//!   unchanged over MongoDB in production and an in-memory store in tests.
//! - Store failures become 500 responses; no request can bring the process
//!   down.
//! - Complete and delete answer `{"success": true}` whether or not a
//!   document matched.

pub mod config;
pub mod error;
pub mod model;
pub mod routes;
pub mod store;
pub mod telemetry;

use std::future::Future;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::ApiError;
pub use model::{CreateTodo, SuccessResponse, Todo, TodoId};
pub use store::{MemoryStore, MongoStore, SharedStore, StoreError, TodoStore};

pub fn app(store: SharedStore) -> Router {
    routes::router(store).layer(TraceLayer::new_for_http())
}

/// Serves `app(store)` on `listener` until `shutdown` resolves, then lets
/// in-flight requests finish.
pub async fn run<F>(listener: TcpListener, store: SharedStore, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(store))
        .with_graceful_shutdown(shutdown)
        .await
}
