//! Expense Handlers
//!
//! The five CRUD endpoints over the expense collection.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::request::{ExpensePayload, ListQueryParams};
use crate::application::dto::response::{
    DeleteResponse, ExpenseResponse, InsertResponse, UpdateResponse,
};
use crate::application::services::{ExpenseError, ExpenseService, ExpenseServiceImpl};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Map service errors to HTTP errors.
fn map_error(error: ExpenseError) -> AppError {
    match error {
        ExpenseError::InvalidTitle | ExpenseError::InvalidAmount | ExpenseError::InvalidDate => {
            AppError::Validation(error.to_string())
        }
        ExpenseError::MalformedId => AppError::BadRequest(error.to_string()),
        ExpenseError::NotFound => AppError::NotFound(error.to_string()),
        ExpenseError::Repository(e) => e,
    }
}

/// Create a new expense
pub async fn create_expense(
    State(state): State<AppState>,
    Json(body): Json<ExpensePayload>,
) -> Result<(StatusCode, Json<InsertResponse>), AppError> {
    let service = ExpenseServiceImpl::new(state.expenses.clone());

    let ack = service.create_expense(body).await.map_err(map_error)?;

    Ok((StatusCode::CREATED, Json(InsertResponse::from(ack))))
}

/// List expenses, optionally filtered by exact category match
pub async fn list_expenses(
    State(state): State<AppState>,
    Query(params): Query<ListQueryParams>,
) -> Result<Json<Vec<ExpenseResponse>>, AppError> {
    let service = ExpenseServiceImpl::new(state.expenses.clone());

    // An empty `?category=` means no filter, not a filter for the empty string
    let category = params.category.filter(|c| !c.is_empty());

    let expenses = service
        .list_expenses(category)
        .await
        .map_err(map_error)?;

    Ok(Json(expenses.into_iter().map(ExpenseResponse::from).collect()))
}

/// Get expense by ID
pub async fn get_expense(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ExpenseResponse>, AppError> {
    let service = ExpenseServiceImpl::new(state.expenses.clone());

    let expense = service.get_expense(&id).await.map_err(map_error)?;

    Ok(Json(ExpenseResponse::from(expense)))
}

/// Update expense (full replacement of the four record fields)
pub async fn update_expense(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<ExpensePayload>,
) -> Result<Json<UpdateResponse>, AppError> {
    let service = ExpenseServiceImpl::new(state.expenses.clone());

    let ack = service.update_expense(&id, body).await.map_err(map_error)?;

    Ok(Json(UpdateResponse::from(ack)))
}

/// Delete expense
pub async fn delete_expense(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let service = ExpenseServiceImpl::new(state.expenses.clone());

    let ack = service.delete_expense(&id).await.map_err(map_error)?;

    Ok(Json(DeleteResponse::from(ack)))
}
