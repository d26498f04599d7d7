//! # Domain Layer
//!
//! The domain layer contains the core business types of the expense service.
//! It is independent of the HTTP framework and the concrete store client.
//!
//! - **entities**: The expense entity, store acknowledgments, and the
//!   repository trait defining the data access contract

pub mod entities;

// Re-export commonly used types
pub use entities::*;
