//! # Storage Traits
//!
//! The interface the domain layer uses to persist todos. Implementations
//! decide how rows are stored; the domain only sees `Todo` values.

use async_trait::async_trait;

use crate::domain::models::todo::{NewTodo, Todo, TodoChanges};
use crate::storage::StorageError;

/// Trait defining the interface for todo storage operations
#[async_trait]
pub trait TodoStorage: Send + Sync {
    /// Insert a new todo and return it with its assigned ID
    async fn create(&self, todo: &NewTodo) -> Result<Todo, StorageError>;

    /// List every stored todo in storage order
    async fn list(&self) -> Result<Vec<Todo>, StorageError>;

    /// Retrieve a todo by ID, `None` if no row matches
    async fn get_by_id(&self, id: i64) -> Result<Option<Todo>, StorageError>;

    /// Overwrite the mutable fields of a todo.
    /// Returns the stored row after the write, or `None` if no row matched.
    /// The creation timestamp is never touched.
    async fn update(&self, id: i64, changes: &TodoChanges) -> Result<Option<Todo>, StorageError>;

    /// Delete a todo.
    /// Returns true if a row was found and deleted, false otherwise
    async fn delete(&self, id: i64) -> Result<bool, StorageError>;
}
