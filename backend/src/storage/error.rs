use thiserror::Error;

/// Failures raised by the storage layer.
///
/// A missing row is never an error here; lookups return `Option` instead.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid database configuration: {0}")]
    Configuration(String),

    #[error("Database error during {operation}: {source}")]
    Query {
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("Corrupt row in Todos table: {0}")]
    CorruptRow(String),
}

impl StorageError {
    pub fn query(operation: &'static str, source: sqlx::Error) -> Self {
        Self::Query { operation, source }
    }
}
