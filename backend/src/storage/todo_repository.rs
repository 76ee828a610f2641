use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row};
use tracing::{error, info};

use crate::domain::models::todo::{format_timestamp, parse_timestamp, NewTodo, Todo, TodoChanges};
use crate::storage::{DbConnection, StorageError, TodoStorage};

/// SQLite-backed todo repository
#[derive(Clone)]
pub struct TodoRepository {
    db: DbConnection,
}

impl TodoRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn todo_from_row(row: &SqliteRow) -> Result<Todo, StorageError> {
        let corrupt = |e: sqlx::Error| StorageError::CorruptRow(e.to_string());

        let created_at: String = row.try_get("CreatedAt").map_err(corrupt)?;
        let created_at = parse_timestamp(&created_at).map_err(|e| {
            StorageError::CorruptRow(format!("unreadable CreatedAt '{}': {}", created_at, e))
        })?;

        Ok(Todo {
            id: row.try_get("Id").map_err(corrupt)?,
            title: row.try_get("Title").map_err(corrupt)?,
            description: row.try_get("Description").map_err(corrupt)?,
            is_completed: row.try_get::<i64, _>("IsCompleted").map_err(corrupt)? != 0,
            created_at,
        })
    }
}

#[async_trait]
impl TodoStorage for TodoRepository {
    async fn create(&self, todo: &NewTodo) -> Result<Todo, StorageError> {
        let mut conn = self.db.open().await?;
        let result = sqlx::query(
            r#"
            INSERT INTO Todos (Title, Description, IsCompleted, CreatedAt)
            VALUES (?, ?, 0, ?)
            "#,
        )
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(format_timestamp(&todo.created_at))
        .execute(&mut conn)
        .await;
        self.db.close(conn).await;

        let id = result
            .map_err(|e| {
                error!("Error creating todo: {}", e);
                StorageError::query("create todo", e)
            })?
            .last_insert_rowid();

        info!("Created todo with ID {}", id);
        Ok(Todo {
            id,
            title: todo.title.clone(),
            description: todo.description.clone(),
            is_completed: false,
            created_at: todo.created_at,
        })
    }

    async fn list(&self) -> Result<Vec<Todo>, StorageError> {
        let mut conn = self.db.open().await?;
        let result = sqlx::query(
            r#"
            SELECT Id, Title, Description, IsCompleted, CreatedAt
            FROM Todos
            "#,
        )
        .fetch_all(&mut conn)
        .await;
        self.db.close(conn).await;

        let rows = result.map_err(|e| {
            error!("Error retrieving todos: {}", e);
            StorageError::query("list todos", e)
        })?;

        rows.iter().map(Self::todo_from_row).collect()
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Todo>, StorageError> {
        let mut conn = self.db.open().await?;
        let result = sqlx::query(
            r#"
            SELECT Id, Title, Description, IsCompleted, CreatedAt
            FROM Todos
            WHERE Id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&mut conn)
        .await;
        self.db.close(conn).await;

        let row = result.map_err(|e| {
            error!("Error retrieving todo with ID {}: {}", id, e);
            StorageError::query("get todo", e)
        })?;

        row.as_ref().map(Self::todo_from_row).transpose()
    }

    async fn update(&self, id: i64, changes: &TodoChanges) -> Result<Option<Todo>, StorageError> {
        // CreatedAt is never written after insert
        let mut conn = self.db.open().await?;
        let result = sqlx::query(
            r#"
            UPDATE Todos
            SET Title = ?, Description = ?, IsCompleted = ?
            WHERE Id = ?
            RETURNING Id, Title, Description, IsCompleted, CreatedAt
            "#,
        )
        .bind(&changes.title)
        .bind(&changes.description)
        .bind(changes.is_completed)
        .bind(id)
        .fetch_optional(&mut conn)
        .await;
        self.db.close(conn).await;

        let row = result.map_err(|e| {
            error!("Error updating todo with ID {}: {}", id, e);
            StorageError::query("update todo", e)
        })?;

        let todo = row.as_ref().map(Self::todo_from_row).transpose()?;
        if todo.is_some() {
            info!("Updated todo with ID {}", id);
        }
        Ok(todo)
    }

    async fn delete(&self, id: i64) -> Result<bool, StorageError> {
        let mut conn = self.db.open().await?;
        let result = sqlx::query(
            r#"
            DELETE FROM Todos WHERE Id = ?
            "#,
        )
        .bind(id)
        .execute(&mut conn)
        .await;
        self.db.close(conn).await;

        let rows_affected = result
            .map_err(|e| {
                error!("Error deleting todo with ID {}: {}", id, e);
                StorageError::query("delete todo", e)
            })?
            .rows_affected();

        if rows_affected > 0 {
            info!("Deleted todo with ID {}", id);
        }
        Ok(rows_affected > 0)
    }
}
