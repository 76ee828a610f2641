//! # Todo Backend
//!
//! A small REST service that stores todo items in SQLite.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (axum handlers, DTO mapping, validation)
//!     ↓
//! Domain Layer (TodoService)
//!     ↓
//! Storage Layer (TodoRepository, one SQLite connection per call)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use std::sync::Arc;

use axum::{
    http::{HeaderValue, Method},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::domain::TodoService;
use crate::storage::{DbConnection, StorageError, TodoRepository};

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub todo_service: TodoService,
}

/// Initialize the backend: prepare the database and wire up services
pub async fn initialize_backend(config: &DatabaseConfig) -> Result<AppState, StorageError> {
    info!("Setting up database");
    let db = DbConnection::new(config)?;
    db.initialize().await?;

    info!("Setting up application state");
    let repository = TodoRepository::new(db);
    Ok(AppState {
        todo_service: TodoService::new(Arc::new(repository)),
    })
}

/// Create the Axum router with all routes configured.
/// CORS is only enabled when an allowed origin is given.
pub fn create_router(app_state: AppState, cors_origin: Option<HeaderValue>) -> Router {
    let mut router = io::rest::todo_apis::router().layer(TraceLayer::new_for_http());

    if let Some(origin) = cors_origin {
        let cors = CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers(Any);
        router = router.layer(cors);
    }

    router.with_state(app_state)
}
