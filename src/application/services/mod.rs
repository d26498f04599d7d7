//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **ExpenseService**: Expense CRUD with create-path validation

pub mod expense_service;

// Re-export expense service types
pub use expense_service::{ExpenseError, ExpenseService, ExpenseServiceImpl};
