//! # Domain Module
//!
//! Todo model types and the service the REST layer calls into.
//! The service owns timestamp assignment and turns "no such row" into a
//! typed `NotFound` error; everything else is delegated to storage.

pub mod commands;
pub mod models;
pub mod todo_service;

pub use todo_service::{TodoService, TodoServiceError};
