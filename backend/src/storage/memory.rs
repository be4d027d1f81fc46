//! # In-Memory Storage
//!
//! Vec-backed implementations of the storage traits. Nothing survives a
//! restart; used for `--storage memory` and as a fast backend in tests.

use anyhow::{bail, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::models::{Category, Transaction, User};
use crate::storage::traits::{CategoryStorage, Connection, EmailTaken, TransactionStorage, UserStorage};

#[derive(Clone, Default)]
pub struct MemoryConnection {
    transactions: Arc<RwLock<Vec<Transaction>>>,
    categories: Arc<RwLock<Vec<Category>>>,
    users: Arc<RwLock<Vec<User>>>,
}

impl MemoryConnection {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Connection for MemoryConnection {
    fn create_transaction_repository(&self) -> Arc<dyn TransactionStorage> {
        Arc::new(MemoryTransactionRepository {
            transactions: self.transactions.clone(),
        })
    }

    fn create_category_repository(&self) -> Arc<dyn CategoryStorage> {
        Arc::new(MemoryCategoryRepository {
            categories: self.categories.clone(),
        })
    }

    fn create_user_repository(&self) -> Arc<dyn UserStorage> {
        Arc::new(MemoryUserRepository {
            users: self.users.clone(),
        })
    }
}

/// Replaces the entry with the same id. Returns false if there is none.
fn replace_by_id<T: Clone>(items: &mut [T], id: &str, item: &T, id_of: fn(&T) -> &str) -> bool {
    match items.iter_mut().find(|existing| id_of(existing) == id) {
        Some(existing) => {
            *existing = item.clone();
            true
        }
        None => false,
    }
}

fn remove_by_id<T>(items: &mut Vec<T>, id: &str, id_of: fn(&T) -> &str) -> bool {
    let before = items.len();
    items.retain(|existing| id_of(existing) != id);
    items.len() < before
}

pub struct MemoryTransactionRepository {
    transactions: Arc<RwLock<Vec<Transaction>>>,
}

#[async_trait]
impl TransactionStorage for MemoryTransactionRepository {
    async fn store_transaction(&self, transaction: &Transaction) -> Result<()> {
        let mut transactions = self.transactions.write().await;
        if transactions.iter().any(|t| t.id == transaction.id) {
            bail!("Transaction {} already exists", transaction.id);
        }
        transactions.push(transaction.clone());
        Ok(())
    }

    async fn get_transaction(&self, transaction_id: &str) -> Result<Option<Transaction>> {
        let transactions = self.transactions.read().await;
        Ok(transactions.iter().find(|t| t.id == transaction_id).cloned())
    }

    async fn list_transactions(&self) -> Result<Vec<Transaction>> {
        Ok(self.transactions.read().await.clone())
    }

    async fn update_transaction(&self, transaction: &Transaction) -> Result<bool> {
        let mut transactions = self.transactions.write().await;
        Ok(replace_by_id(&mut transactions, &transaction.id, transaction, |t| t.id.as_str()))
    }

    async fn delete_transaction(&self, transaction_id: &str) -> Result<bool> {
        let mut transactions = self.transactions.write().await;
        Ok(remove_by_id(&mut transactions, transaction_id, |t| t.id.as_str()))
    }
}

pub struct MemoryCategoryRepository {
    categories: Arc<RwLock<Vec<Category>>>,
}

#[async_trait]
impl CategoryStorage for MemoryCategoryRepository {
    async fn store_category(&self, category: &Category) -> Result<()> {
        let mut categories = self.categories.write().await;
        if categories.iter().any(|c| c.id == category.id) {
            bail!("Category {} already exists", category.id);
        }
        categories.push(category.clone());
        Ok(())
    }

    async fn get_category(&self, category_id: &str) -> Result<Option<Category>> {
        let categories = self.categories.read().await;
        Ok(categories.iter().find(|c| c.id == category_id).cloned())
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        let mut categories = self.categories.read().await.clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(categories)
    }

    async fn update_category(&self, category: &Category) -> Result<bool> {
        let mut categories = self.categories.write().await;
        Ok(replace_by_id(&mut categories, &category.id, category, |c| c.id.as_str()))
    }

    async fn delete_category(&self, category_id: &str) -> Result<bool> {
        let mut categories = self.categories.write().await;
        Ok(remove_by_id(&mut categories, category_id, |c| c.id.as_str()))
    }
}

pub struct MemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

#[async_trait]
impl UserStorage for MemoryUserRepository {
    async fn store_user(&self, user: &User) -> Result<()> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.id == user.id) {
            bail!("User {} already exists", user.id);
        }
        if users.iter().any(|u| u.email == user.email) {
            return Err(EmailTaken(user.email.clone()).into());
        }
        users.push(user.clone());
        Ok(())
    }

    async fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn update_user(&self, user: &User) -> Result<bool> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.id != user.id && u.email == user.email) {
            return Err(EmailTaken(user.email.clone()).into());
        }
        Ok(replace_by_id(&mut users, &user.id, user, |u| u.id.as_str()))
    }

    async fn delete_user(&self, user_id: &str) -> Result<bool> {
        let mut users = self.users.write().await;
        Ok(remove_by_id(&mut users, user_id, |u| u.id.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::TransactionType;
    use crate::test_utils::{category_named, transaction_on, user_with_email};

    #[tokio::test]
    async fn test_repositories_share_state_through_connection() {
        let connection = MemoryConnection::new();
        let writer = connection.create_transaction_repository();
        let reader = connection.create_transaction_repository();

        let transaction = transaction_on("u1", "2024-01-15", TransactionType::Income, 10.0, "c1");
        writer.store_transaction(&transaction).await.unwrap();

        assert_eq!(reader.list_transactions().await.unwrap(), vec![transaction]);
    }

    #[tokio::test]
    async fn test_transaction_crud() {
        let repo = MemoryConnection::new().create_transaction_repository();
        let mut transaction = transaction_on("u1", "2024-01-15", TransactionType::Income, 10.0, "c1");

        repo.store_transaction(&transaction).await.unwrap();
        assert!(repo.store_transaction(&transaction).await.is_err());

        transaction.amount = 12.0;
        assert!(repo.update_transaction(&transaction).await.unwrap());
        assert_eq!(repo.get_transaction(&transaction.id).await.unwrap().unwrap().amount, 12.0);

        assert!(repo.delete_transaction(&transaction.id).await.unwrap());
        assert!(!repo.delete_transaction(&transaction.id).await.unwrap());
        assert!(!repo.update_transaction(&transaction).await.unwrap());
    }

    #[tokio::test]
    async fn test_categories_listed_by_name() {
        let repo = MemoryConnection::new().create_category_repository();
        repo.store_category(&category_named("c1", "Salary")).await.unwrap();
        repo.store_category(&category_named("c2", "Groceries")).await.unwrap();

        let ids: Vec<String> = repo
            .list_categories()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["c2", "c1"]);
    }

    #[tokio::test]
    async fn test_user_email_must_be_unique() {
        let repo = MemoryConnection::new().create_user_repository();
        let ana = user_with_email("ana@example.com");
        let mut bob = user_with_email("bob@example.com");
        repo.store_user(&ana).await.unwrap();
        repo.store_user(&bob).await.unwrap();

        let error = repo.store_user(&user_with_email("ana@example.com")).await.unwrap_err();
        assert!(error.downcast_ref::<EmailTaken>().is_some());

        bob.email = "ana@example.com".to_string();
        let error = repo.update_user(&bob).await.unwrap_err();
        assert!(error.downcast_ref::<EmailTaken>().is_some());

        // Re-inserting the same id is a plain storage failure
        let error = repo.store_user(&ana).await.unwrap_err();
        assert!(error.downcast_ref::<EmailTaken>().is_none());
    }
}
