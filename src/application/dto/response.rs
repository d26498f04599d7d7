//! Response DTOs
//!
//! Data structures for API response bodies. Acknowledgment bodies keep the
//! camelCase field names the store's drivers use on the wire, so existing
//! clients of the service see the shapes they already parse.

use serde::Serialize;

use crate::domain::{DeleteAck, Expense, InsertAck, UpdateAck};

/// A single expense record as returned to clients.
#[derive(Debug, Serialize)]
pub struct ExpenseResponse {
    /// Identifier as a hex string
    pub id: String,
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub date: String,
}

impl From<Expense> for ExpenseResponse {
    fn from(expense: Expense) -> Self {
        Self {
            id: expense.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: expense.title,
            amount: expense.amount,
            category: expense.category,
            date: expense.date,
        }
    }
}

/// Insertion acknowledgment, `{"acknowledged": true, "insertedId": "..."}`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResponse {
    pub acknowledged: bool,
    pub inserted_id: String,
}

impl From<InsertAck> for InsertResponse {
    fn from(ack: InsertAck) -> Self {
        Self {
            acknowledged: true,
            inserted_id: ack.inserted_id.to_hex(),
        }
    }
}

/// Update acknowledgment with matched/modified counts.
///
/// A zero `matchedCount` still comes back as a success.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResponse {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
}

impl From<UpdateAck> for UpdateResponse {
    fn from(ack: UpdateAck) -> Self {
        Self {
            acknowledged: true,
            matched_count: ack.matched_count,
            modified_count: ack.modified_count,
        }
    }
}

/// Deletion acknowledgment with the removed-document count (0 or 1).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl From<DeleteAck> for DeleteResponse {
    fn from(ack: DeleteAck) -> Self {
        Self {
            acknowledged: true,
            deleted_count: ack.deleted_count,
        }
    }
}
