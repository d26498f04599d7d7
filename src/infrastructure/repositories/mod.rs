//! Repository Implementations
//!
//! MongoDB implementations of domain repository traits.
//!
//! ## Available Repositories
//!
//! - **ExpenseRepository** - Expense document CRUD

pub mod expense_repository;

pub use expense_repository::MongoExpenseRepository;
