//! # IO Module
//!
//! The HTTP boundary of the service: axum handlers, request/response mapping
//! and error translation.

pub mod rest;

pub use rest::*;
