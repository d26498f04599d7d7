//! Expense entity and repository trait.
//!
//! Maps to documents in the `expenses` collection.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// One expense record.
///
/// Document shape in the store:
/// - `_id`: ObjectId (store-assigned, immutable once created)
/// - `title`: string, at least 3 characters after trimming
/// - `amount`: double, strictly greater than zero
/// - `category`: free-form string, used for exact-match filtering
/// - `date`: string accepted as a parseable calendar date at the boundary,
///   stored as supplied
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Store-assigned identifier (absent before insertion)
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Short description of the expense
    pub title: String,

    /// Amount spent
    pub amount: f64,

    /// Free-form category label
    pub category: String,

    /// Calendar date of the expense
    pub date: String,
}

/// Acknowledgment of a successful insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertAck {
    /// Identifier the store assigned to the new document
    pub inserted_id: ObjectId,
}

/// Acknowledgment of an update attempt.
///
/// A zero `matched_count` is not an error; the operation succeeded and
/// simply touched nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateAck {
    /// Number of documents the filter matched (0 or 1)
    pub matched_count: u64,

    /// Number of documents actually modified (0 or 1)
    pub modified_count: u64,
}

/// Acknowledgment of a delete attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteAck {
    /// Number of documents removed (0 or 1)
    pub deleted_count: u64,
}

/// Repository trait for expense data access operations.
///
/// Each method performs exactly one store operation. Single-document write
/// atomicity of the store is the only consistency guarantee for concurrent
/// writes to the same identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    /// Insert a new expense and return the assigned identifier.
    async fn insert(&self, expense: &Expense) -> Result<InsertAck, AppError>;

    /// Find all expenses, optionally filtered by exact category equality.
    ///
    /// Results come back in the store's natural retrieval order, which is
    /// not guaranteed stable across calls.
    async fn find_all(&self, category: Option<String>) -> Result<Vec<Expense>, AppError>;

    /// Find one expense by its identifier.
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Expense>, AppError>;

    /// Replace the title, amount, category, and date fields of one expense.
    ///
    /// The `id` field of `replacement` is ignored; the identifier never
    /// changes.
    async fn replace_fields(
        &self,
        id: ObjectId,
        replacement: &Expense,
    ) -> Result<UpdateAck, AppError>;

    /// Delete one expense by its identifier.
    async fn delete(&self, id: ObjectId) -> Result<DeleteAck, AppError>;

    /// Check store connectivity.
    async fn ping(&self) -> Result<(), AppError>;
}
