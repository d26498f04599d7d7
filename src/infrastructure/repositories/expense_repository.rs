//! Expense Repository Implementation
//!
//! MongoDB implementation of the ExpenseRepository trait. Each method maps
//! to exactly one store operation against the expense collection.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::doc;
use mongodb::{Client, Collection, Database};

use crate::config::DatabaseSettings;
use crate::domain::{DeleteAck, Expense, ExpenseRepository, InsertAck, UpdateAck};
use crate::shared::error::AppError;

/// MongoDB expense repository.
///
/// Holds a handle to the expense collection; handles clone it freely since
/// `Collection` is a cheap reference to the shared client.
#[derive(Clone)]
pub struct MongoExpenseRepository {
    database: Database,
    collection: Collection<Expense>,
}

impl MongoExpenseRepository {
    /// Create a repository over the configured database and collection.
    pub fn new(client: &Client, settings: &DatabaseSettings) -> Self {
        let database = client.database(&settings.name);
        let collection = database.collection(&settings.collection);
        Self {
            database,
            collection,
        }
    }
}

#[async_trait]
impl ExpenseRepository for MongoExpenseRepository {
    /// Insert a new document and return the store-assigned identifier.
    async fn insert(&self, expense: &Expense) -> Result<InsertAck, AppError> {
        let result = self.collection.insert_one(expense).await?;

        let inserted_id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::Internal("store returned a non-ObjectId identifier".into()))?;

        Ok(InsertAck { inserted_id })
    }

    /// Find all documents, optionally filtered by exact category equality.
    async fn find_all(&self, category: Option<String>) -> Result<Vec<Expense>, AppError> {
        let filter = match category {
            Some(category) => doc! { "category": category },
            None => doc! {},
        };

        let cursor = self.collection.find(filter).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Find one document by identifier.
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Expense>, AppError> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// `$set` the four record fields on the matching document.
    async fn replace_fields(
        &self,
        id: ObjectId,
        replacement: &Expense,
    ) -> Result<UpdateAck, AppError> {
        let update = doc! {
            "$set": {
                "title": &replacement.title,
                "amount": replacement.amount,
                "category": &replacement.category,
                "date": &replacement.date,
            }
        };

        let result = self
            .collection
            .update_one(doc! { "_id": id }, update)
            .await?;

        Ok(UpdateAck {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    /// Delete one document by identifier.
    async fn delete(&self, id: ObjectId) -> Result<DeleteAck, AppError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        Ok(DeleteAck {
            deleted_count: result.deleted_count,
        })
    }

    /// Ping the store.
    async fn ping(&self) -> Result<(), AppError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
