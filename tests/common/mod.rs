//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure. Tests run the real
//! router over an in-memory repository, so the whole HTTP surface is
//! exercised without a running store.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{body::Body, http::Request, response::Response, Router};
use mongodb::bson::oid::ObjectId;
use tower::ServiceExt;

use expense_api::domain::{DeleteAck, Expense, ExpenseRepository, InsertAck, UpdateAck};
use expense_api::presentation::http::routes;
use expense_api::shared::error::AppError;
use expense_api::startup::AppState;

/// In-memory stand-in for the document store.
///
/// Mirrors the store's observable behavior: assigned ObjectIds, natural
/// insertion order on retrieval, matched/modified counts on update, and
/// zero-effect success for misses.
#[derive(Default)]
pub struct InMemoryExpenseRepository {
    documents: Mutex<Vec<Expense>>,
}

#[async_trait]
impl ExpenseRepository for InMemoryExpenseRepository {
    async fn insert(&self, expense: &Expense) -> Result<InsertAck, AppError> {
        let inserted_id = ObjectId::new();
        let mut stored = expense.clone();
        stored.id = Some(inserted_id);

        self.documents.lock().unwrap().push(stored);
        Ok(InsertAck { inserted_id })
    }

    async fn find_all(&self, category: Option<String>) -> Result<Vec<Expense>, AppError> {
        let documents = self.documents.lock().unwrap();
        Ok(documents
            .iter()
            .filter(|e| category.as_deref().map_or(true, |c| e.category == c))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Expense>, AppError> {
        let documents = self.documents.lock().unwrap();
        Ok(documents.iter().find(|e| e.id == Some(id)).cloned())
    }

    async fn replace_fields(
        &self,
        id: ObjectId,
        replacement: &Expense,
    ) -> Result<UpdateAck, AppError> {
        let mut documents = self.documents.lock().unwrap();
        match documents.iter_mut().find(|e| e.id == Some(id)) {
            Some(existing) => {
                let changed = existing.title != replacement.title
                    || existing.amount != replacement.amount
                    || existing.category != replacement.category
                    || existing.date != replacement.date;

                existing.title = replacement.title.clone();
                existing.amount = replacement.amount;
                existing.category = replacement.category.clone();
                existing.date = replacement.date.clone();

                Ok(UpdateAck {
                    matched_count: 1,
                    modified_count: changed as u64,
                })
            }
            None => Ok(UpdateAck {
                matched_count: 0,
                modified_count: 0,
            }),
        }
    }

    async fn delete(&self, id: ObjectId) -> Result<DeleteAck, AppError> {
        let mut documents = self.documents.lock().unwrap();
        let before = documents.len();
        documents.retain(|e| e.id != Some(id));

        Ok(DeleteAck {
            deleted_count: (before - documents.len()) as u64,
        })
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Test application builder
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    /// Create a new test application over an empty in-memory store
    pub fn new() -> Self {
        let state = AppState {
            expenses: Arc::new(InMemoryExpenseRepository::default()),
        };

        Self {
            router: routes::create_router(state),
        }
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> Response {
        self.request_json("POST", uri, body).await
    }

    /// Make a PATCH request with JSON body
    pub async fn patch_json(&self, uri: &str, body: serde_json::Value) -> Response {
        self.request_json("PATCH", uri, body).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, uri: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn request_json(&self, method: &str, uri: &str, body: serde_json::Value) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }
}

/// Read a response body as JSON
pub async fn response_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Read a response body as text
pub async fn response_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
