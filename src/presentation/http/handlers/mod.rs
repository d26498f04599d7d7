//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod expense;
pub mod health;
