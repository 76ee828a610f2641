//! # REST API Interface Layer
//!
//! HTTP endpoints for todos. Handlers validate input before anything reaches
//! storage and translate domain results into status codes. Storage failures
//! are logged here and answered with a generic 500.

pub mod errors;
pub mod mappers;
pub mod todo_apis;

pub use errors::ApiError;
