use std::str::FromStr;

use sqlx::{
    migrate::MigrateDatabase,
    sqlite::{SqliteConnectOptions, SqliteConnection},
    ConnectOptions, Connection, Sqlite,
};
use tracing::{info, warn};

use crate::config::DatabaseConfig;
use crate::storage::StorageError;

/// DbConnection hands out one short-lived SQLite connection per operation.
///
/// Nothing is cached between calls except the parsed connection options.
/// Callers must hand every connection back through [`DbConnection::close`].
#[derive(Clone, Debug)]
pub struct DbConnection {
    url: String,
    options: SqliteConnectOptions,
}

impl DbConnection {
    /// Build a connection factory from configuration. Does not touch the disk.
    pub fn new(config: &DatabaseConfig) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| StorageError::Configuration(format!("{}: {}", config.url, e)))?;

        Ok(Self {
            url: config.url.clone(),
            options,
        })
    }

    /// Create the database file if needed and set up the schema.
    /// Safe to call on every start.
    pub async fn initialize(&self) -> Result<(), StorageError> {
        if !Sqlite::database_exists(&self.url).await.unwrap_or(false) {
            info!("Creating database at {}", self.url);
            Sqlite::create_database(&self.url)
                .await
                .map_err(|e| StorageError::query("create database", e))?;
        }

        let mut conn = self.open().await?;
        let result = Self::setup_schema(&mut conn).await;
        self.close(conn).await;
        result?;

        info!("Database initialized successfully");
        Ok(())
    }

    /// Open a fresh connection
    pub async fn open(&self) -> Result<SqliteConnection, StorageError> {
        self.options
            .connect()
            .await
            .map_err(|e| StorageError::query("open connection", e))
    }

    /// Close a connection obtained from [`DbConnection::open`].
    /// A failed close is logged; the caller's result stands.
    pub async fn close(&self, conn: SqliteConnection) {
        if let Err(e) = conn.close().await {
            warn!("Failed to close database connection: {}", e);
        }
    }

    /// Initialize a throwaway database inside a fresh temp directory.
    /// The directory is removed when the returned guard drops.
    #[cfg(test)]
    pub async fn init_test() -> (tempfile::TempDir, Self) {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let url = format!("sqlite:{}", dir.path().join("todos.db").display());
        let db = Self::new(&DatabaseConfig::new(url)).expect("Failed to parse test database url");
        db.initialize().await.expect("Failed to initialize test database");
        (dir, db)
    }

    async fn setup_schema(conn: &mut SqliteConnection) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS Todos (
                Id INTEGER PRIMARY KEY AUTOINCREMENT,
                Title TEXT NOT NULL,
                Description TEXT,
                IsCompleted INTEGER NOT NULL DEFAULT 0,
                CreatedAt TEXT NOT NULL
            );
            "#,
        )
        .execute(conn)
        .await
        .map_err(|e| StorageError::query("create schema", e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_is_configuration_error() {
        let result = DbConnection::new(&DatabaseConfig::new("sqlite:todos.db?flavor=vanilla"));
        assert!(matches!(result, Err(StorageError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_initialize_is_idempotent() {
        let (_dir, db) = DbConnection::init_test().await;

        // Second run must not fail on the existing table
        db.initialize().await.expect("Re-initializing should succeed");

        let mut conn = db.open().await.expect("Failed to open connection");
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM Todos")
            .fetch_one(&mut conn)
            .await
            .expect("Todos table should exist");
        db.close(conn).await;

        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_open_fails_when_directory_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite:{}", dir.path().join("missing").join("todos.db").display());
        let db = DbConnection::new(&DatabaseConfig::new(url)).unwrap();

        let result = db.open().await;
        assert!(matches!(result, Err(StorageError::Query { .. })));
    }
}
