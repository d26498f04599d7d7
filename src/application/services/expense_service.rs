//! Expense Service
//!
//! Handles expense CRUD operations and input validation.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate};
use mongodb::bson::oid::ObjectId;

use crate::application::dto::request::{AmountField, ExpensePayload};
use crate::domain::{DeleteAck, Expense, ExpenseRepository, InsertAck, UpdateAck};
use crate::shared::error::AppError;

/// Expense service trait
#[async_trait]
pub trait ExpenseService: Send + Sync {
    /// Validate and persist a new expense
    async fn create_expense(&self, payload: ExpensePayload) -> Result<InsertAck, ExpenseError>;

    /// List expenses, optionally filtered by exact category match
    async fn list_expenses(&self, category: Option<String>) -> Result<Vec<Expense>, ExpenseError>;

    /// Get one expense by its identifier
    async fn get_expense(&self, id: &str) -> Result<Expense, ExpenseError>;

    /// Replace the four record fields of one expense
    async fn update_expense(
        &self,
        id: &str,
        payload: ExpensePayload,
    ) -> Result<UpdateAck, ExpenseError>;

    /// Delete one expense by its identifier
    async fn delete_expense(&self, id: &str) -> Result<DeleteAck, ExpenseError>;
}

/// Expense service errors
///
/// The three validation messages are part of the API contract; clients match
/// on them verbatim.
#[derive(Debug, thiserror::Error)]
pub enum ExpenseError {
    #[error("Title must be at least 3 characters long.")]
    InvalidTitle,

    #[error("Amount must be a number and greater than 0.")]
    InvalidAmount,

    #[error("Date must be a valid date.")]
    InvalidDate,

    #[error("Invalid expense id.")]
    MalformedId,

    #[error("Expense not found.")]
    NotFound,

    #[error(transparent)]
    Repository(#[from] AppError),
}

/// ExpenseService implementation over an injected repository.
pub struct ExpenseServiceImpl {
    repository: Arc<dyn ExpenseRepository>,
}

impl ExpenseServiceImpl {
    pub fn new(repository: Arc<dyn ExpenseRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ExpenseService for ExpenseServiceImpl {
    async fn create_expense(&self, payload: ExpensePayload) -> Result<InsertAck, ExpenseError> {
        let expense = validate_payload(&payload)?;

        let ack = self.repository.insert(&expense).await?;
        tracing::debug!(id = %ack.inserted_id, "Expense created");

        Ok(ack)
    }

    async fn list_expenses(&self, category: Option<String>) -> Result<Vec<Expense>, ExpenseError> {
        Ok(self.repository.find_all(category).await?)
    }

    async fn get_expense(&self, id: &str) -> Result<Expense, ExpenseError> {
        let id = parse_id(id)?;

        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ExpenseError::NotFound)
    }

    async fn update_expense(
        &self,
        id: &str,
        payload: ExpensePayload,
    ) -> Result<UpdateAck, ExpenseError> {
        let id = parse_id(id)?;
        // Full replacement of the four record fields; the same checks as the
        // create path apply.
        let replacement = validate_payload(&payload)?;

        let ack = self.repository.replace_fields(id, &replacement).await?;
        tracing::debug!(
            %id,
            matched = ack.matched_count,
            modified = ack.modified_count,
            "Expense update applied"
        );

        Ok(ack)
    }

    async fn delete_expense(&self, id: &str) -> Result<DeleteAck, ExpenseError> {
        let id = parse_id(id)?;

        let ack = self.repository.delete(id).await?;
        tracing::debug!(%id, deleted = ack.deleted_count, "Expense delete applied");

        Ok(ack)
    }
}

/// Parse an identifier string, rejecting malformed ids before any store access.
fn parse_id(id: &str) -> Result<ObjectId, ExpenseError> {
    ObjectId::parse_str(id).map_err(|_| ExpenseError::MalformedId)
}

/// Check the payload in a fixed order, short-circuiting on the first failure:
/// title, then amount, then date. A missing field fails the same check as a
/// malformed one.
fn validate_payload(payload: &ExpensePayload) -> Result<Expense, ExpenseError> {
    let title = payload.title.as_deref().ok_or(ExpenseError::InvalidTitle)?;
    if title.trim().chars().count() < 3 {
        return Err(ExpenseError::InvalidTitle);
    }

    let amount = payload
        .amount
        .as_ref()
        .and_then(AmountField::as_number)
        .ok_or(ExpenseError::InvalidAmount)?;
    if amount <= 0.0 {
        return Err(ExpenseError::InvalidAmount);
    }

    let date = payload.date.as_deref().ok_or(ExpenseError::InvalidDate)?;
    if !is_calendar_date(date) {
        return Err(ExpenseError::InvalidDate);
    }

    Ok(Expense {
        id: None,
        title: title.to_string(),
        amount,
        category: payload.category.clone().unwrap_or_default(),
        date: date.to_string(),
    })
}

/// Accept RFC 3339 date-times and plain `YYYY-MM-DD` dates.
fn is_calendar_date(value: &str) -> bool {
    DateTime::parse_from_rfc3339(value).is_ok()
        || NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}
