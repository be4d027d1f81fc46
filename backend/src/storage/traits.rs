//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::models::{Category, Transaction, User};

/// Returned (inside `anyhow::Error`) when a user write collides with an email
/// held by another user.
#[derive(Debug, thiserror::Error)]
#[error("Email {0} is already in use")]
pub struct EmailTaken(pub String);

/// Trait defining the interface for transaction storage operations
#[async_trait]
pub trait TransactionStorage: Send + Sync {
    /// Store a new transaction
    async fn store_transaction(&self, transaction: &Transaction) -> Result<()>;

    /// Retrieve a specific transaction by ID
    async fn get_transaction(&self, transaction_id: &str) -> Result<Option<Transaction>>;

    /// List every stored transaction. No ordering is guaranteed.
    async fn list_transactions(&self) -> Result<Vec<Transaction>>;

    /// Replace an existing transaction.
    /// Returns false if no transaction has this ID
    async fn update_transaction(&self, transaction: &Transaction) -> Result<bool>;

    /// Returns true if the transaction was found and deleted
    async fn delete_transaction(&self, transaction_id: &str) -> Result<bool>;
}

/// Trait defining the interface for category storage operations
#[async_trait]
pub trait CategoryStorage: Send + Sync {
    async fn store_category(&self, category: &Category) -> Result<()>;

    async fn get_category(&self, category_id: &str) -> Result<Option<Category>>;

    /// List all categories ordered by name
    async fn list_categories(&self) -> Result<Vec<Category>>;

    async fn update_category(&self, category: &Category) -> Result<bool>;

    async fn delete_category(&self, category_id: &str) -> Result<bool>;
}

/// Trait defining the interface for user storage operations
#[async_trait]
pub trait UserStorage: Send + Sync {
    /// Fails with [`EmailTaken`] if another user holds the same email
    async fn store_user(&self, user: &User) -> Result<()>;

    async fn get_user(&self, user_id: &str) -> Result<Option<User>>;

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;

    async fn list_users(&self) -> Result<Vec<User>>;

    /// Fails with [`EmailTaken`] if another user holds the new email
    async fn update_user(&self, user: &User) -> Result<bool>;

    async fn delete_user(&self, user_id: &str) -> Result<bool>;
}

/// Trait defining the interface for storage connections
///
/// Hands out repositories for one backend so services can be built
/// without knowing which backend they talk to.
pub trait Connection: Send + Sync {
    fn create_transaction_repository(&self) -> Arc<dyn TransactionStorage>;

    fn create_category_repository(&self) -> Arc<dyn CategoryStorage>;

    fn create_user_repository(&self) -> Arc<dyn UserStorage>;
}
