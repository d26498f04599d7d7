//! Infrastructure Layer
//!
//! Contains implementations for external services:
//! - MongoDB client construction
//! - Document store repositories

pub mod database;
pub mod repositories;
