use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::domain::commands::{CreateTodoCommand, UpdateTodoCommand};
use crate::domain::models::todo::{now_timestamp, NewTodo, Todo, TodoChanges};
use crate::storage::{StorageError, TodoStorage};

#[derive(Debug, Error)]
pub enum TodoServiceError {
    #[error("Todo not found: {0}")]
    NotFound(i64),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Service for managing todos
#[derive(Clone)]
pub struct TodoService {
    storage: Arc<dyn TodoStorage>,
}

impl TodoService {
    pub fn new(storage: Arc<dyn TodoStorage>) -> Self {
        Self { storage }
    }

    /// Create a new, incomplete todo stamped with the current time
    pub async fn create_todo(&self, command: CreateTodoCommand) -> Result<Todo, TodoServiceError> {
        info!("Creating todo: title={:?}", command.title);

        let new_todo = NewTodo {
            title: command.title,
            description: command.description,
            created_at: now_timestamp(),
        };

        Ok(self.storage.create(&new_todo).await?)
    }

    pub async fn list_todos(&self) -> Result<Vec<Todo>, TodoServiceError> {
        let todos = self.storage.list().await?;
        info!("Found {} todos", todos.len());
        Ok(todos)
    }

    pub async fn get_todo(&self, id: i64) -> Result<Todo, TodoServiceError> {
        match self.storage.get_by_id(id).await? {
            Some(todo) => Ok(todo),
            None => {
                warn!("Todo not found: {}", id);
                Err(TodoServiceError::NotFound(id))
            }
        }
    }

    /// Replace title, description and completion state.
    /// The creation time is kept by storage, not carried through here.
    pub async fn update_todo(
        &self,
        id: i64,
        command: UpdateTodoCommand,
    ) -> Result<Todo, TodoServiceError> {
        info!("Updating todo: {}", id);

        self.storage
            .update(id, &TodoChanges::from(command))
            .await?
            .ok_or_else(|| {
                warn!("Todo not found for update: {}", id);
                TodoServiceError::NotFound(id)
            })
    }

    pub async fn delete_todo(&self, id: i64) -> Result<(), TodoServiceError> {
        info!("Deleting todo: {}", id);

        if self.storage.delete(id).await? {
            Ok(())
        } else {
            warn!("Todo not found for delete: {}", id);
            Err(TodoServiceError::NotFound(id))
        }
    }
}
