//! # Storage Module
//!
//! SQLite persistence for todos.
//!
//! Every repository call opens its own connection through [`DbConnection`]
//! and closes it before returning, on success and on error. There is no pool
//! and no cached handle; the only shared state is the parsed connection
//! configuration.
//!
//! All user-supplied values are bound as query parameters.

pub mod connection;
pub mod error;
pub mod todo_repository;
pub mod traits;

pub use connection::DbConnection;
pub use error::StorageError;
pub use todo_repository::TodoRepository;
pub use traits::TodoStorage;
