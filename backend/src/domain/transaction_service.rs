//! Create, read, update and delete for transactions.
use std::sync::Arc;
use tracing::info;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::Transaction;
use crate::domain::timestamps;
use crate::domain::validation::{parse_date, require_text, validate_amount};
use crate::storage::{Connection, TransactionStorage};
use shared::{CreateTransactionRequest, UpdateTransactionRequest};

#[derive(Clone)]
pub struct TransactionService {
    transaction_repository: Arc<dyn TransactionStorage>,
}

/// Blank descriptions are stored as absent.
fn normalize_description(description: Option<String>) -> Option<String> {
    description.filter(|d| !d.trim().is_empty())
}

impl TransactionService {
    pub fn new(connection: &dyn Connection) -> Self {
        Self {
            transaction_repository: connection.create_transaction_repository(),
        }
    }

    pub async fn create(&self, request: CreateTransactionRequest) -> DomainResult<Transaction> {
        let user_id = require_text("userId", &request.user_id)?;
        let title = require_text("title", &request.title)?;
        let category_id = require_text("categoryId", &request.category_id)?;
        let amount = validate_amount(request.amount)?;

        let now = timestamps::now();
        let date = match request.date.as_deref() {
            Some(value) if !value.trim().is_empty() => parse_date("date", value)?,
            _ => now,
        };

        let transaction = Transaction {
            id: Transaction::generate_id(),
            user_id,
            title,
            description: normalize_description(request.description),
            amount,
            transaction_type: request.transaction_type.into(),
            category_id,
            date,
            created_at: now,
            updated_at: now,
        };

        self.transaction_repository
            .store_transaction(&transaction)
            .await?;

        info!(
            "Created {} transaction {} for user {}: {:.2}",
            transaction.transaction_type, transaction.id, transaction.user_id, transaction.amount
        );
        Ok(transaction)
    }

    pub async fn find_all(&self) -> DomainResult<Vec<Transaction>> {
        Ok(self.transaction_repository.list_transactions().await?)
    }

    pub async fn find_by_id(&self, id: &str) -> DomainResult<Transaction> {
        self.transaction_repository
            .get_transaction(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Transaction", id))
    }

    /// Applies the fields present in `request`; absent fields are left as they are.
    pub async fn update(
        &self,
        id: &str,
        request: UpdateTransactionRequest,
    ) -> DomainResult<Transaction> {
        let mut transaction = self.find_by_id(id).await?;

        if let Some(title) = request.title {
            transaction.title = require_text("title", &title)?;
        }
        if let Some(description) = request.description {
            transaction.description = normalize_description(Some(description));
        }
        if let Some(amount) = request.amount {
            transaction.amount = validate_amount(amount)?;
        }
        if let Some(transaction_type) = request.transaction_type {
            transaction.transaction_type = transaction_type.into();
        }
        if let Some(category_id) = request.category_id {
            transaction.category_id = require_text("categoryId", &category_id)?;
        }
        if let Some(date) = request.date {
            transaction.date = parse_date("date", &date)?;
        }
        transaction.updated_at = timestamps::now();

        if !self
            .transaction_repository
            .update_transaction(&transaction)
            .await?
        {
            return Err(DomainError::not_found("Transaction", id));
        }

        info!("Updated transaction {}", id);
        Ok(transaction)
    }

    pub async fn delete(&self, id: &str) -> DomainResult<()> {
        if !self.transaction_repository.delete_transaction(id).await? {
            return Err(DomainError::not_found("Transaction", id));
        }
        info!("Deleted transaction {}", id);
        Ok(())
    }
}
