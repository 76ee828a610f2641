//! # REST API for Todo Management
//!
//! Endpoints for creating, listing, retrieving, updating, and deleting todos.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use shared::{CreateTodoRequest, UpdateTodoRequest};
use tracing::info;

use crate::domain::models::todo::validate_id;
use crate::io::rest::mappers::todo_mapper::TodoMapper;
use crate::io::rest::ApiError;
use crate::AppState;

/// Create a router for todo related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/:id", get(get_todo).put(update_todo).delete(delete_todo))
}

/// Create a new todo
pub async fn create_todo(
    State(state): State<AppState>,
    body: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = body?;
    info!("POST /todos - request: {:?}", request);

    let command = TodoMapper::to_create_command(request)?;
    let todo = state
        .todo_service
        .create_todo(command)
        .await
        .map_err(|e| ApiError::from_service(e, "An error occurred while creating the todo"))?;

    let location = format!("/todos/{}", todo.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(TodoMapper::to_dto(todo)),
    )
        .into_response())
}

/// List all todos
pub async fn list_todos(State(state): State<AppState>) -> Result<Response, ApiError> {
    info!("GET /todos");

    let todos = state
        .todo_service
        .list_todos()
        .await
        .map_err(|e| ApiError::from_service(e, "An error occurred while retrieving todos"))?;

    Ok((StatusCode::OK, Json(TodoMapper::to_dto_list(todos))).into_response())
}

/// Get a todo by ID
pub async fn get_todo(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(id) = id?;
    info!("GET /todos/{}", id);
    let id = validate_id(id)?;

    let todo = state
        .todo_service
        .get_todo(id)
        .await
        .map_err(|e| ApiError::from_service(e, "An error occurred while retrieving the todo"))?;

    Ok((StatusCode::OK, Json(TodoMapper::to_dto(todo))).into_response())
}

/// Replace a todo's title, description and completion state
pub async fn update_todo(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Path(id) = id?;
    let id = validate_id(id)?;
    let Json(request) = body?;
    info!("PUT /todos/{} - request: {:?}", id, request);

    let command = TodoMapper::to_update_command(request)?;
    let todo = state
        .todo_service
        .update_todo(id, command)
        .await
        .map_err(|e| ApiError::from_service(e, "An error occurred while updating the todo"))?;

    Ok((StatusCode::OK, Json(TodoMapper::to_dto(todo))).into_response())
}

/// Delete a todo
pub async fn delete_todo(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    info!("DELETE /todos/{}", id);
    let id = validate_id(id)?;

    state
        .todo_service
        .delete_todo(id)
        .await
        .map_err(|e| ApiError::from_service(e, "An error occurred while deleting the todo"))?;

    Ok(StatusCode::NO_CONTENT)
}
