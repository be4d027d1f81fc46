use anyhow::Result;
use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row};

use super::connection::DbConnection;
use crate::domain::models::{Transaction, TransactionType};
use crate::domain::timestamps::{format_timestamp, parse_timestamp};
use crate::storage::traits::TransactionStorage;

/// Repository for transaction operations
#[derive(Clone)]
pub struct TransactionRepository {
    db: DbConnection,
}

impl TransactionRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn from_row(row: &SqliteRow) -> Result<Transaction> {
        let transaction_type: String = row.try_get("type")?;
        let date: String = row.try_get("date")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        Ok(Transaction {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            amount: row.try_get("amount")?,
            transaction_type: transaction_type.parse::<TransactionType>()?,
            category_id: row.try_get("category_id")?,
            date: parse_timestamp(&date)?,
            created_at: parse_timestamp(&created_at)?,
            updated_at: parse_timestamp(&updated_at)?,
        })
    }
}

#[async_trait]
impl TransactionStorage for TransactionRepository {
    async fn store_transaction(&self, transaction: &Transaction) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO transactions
                (id, user_id, title, description, amount, type, category_id, date, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&transaction.id)
        .bind(&transaction.user_id)
        .bind(&transaction.title)
        .bind(&transaction.description)
        .bind(transaction.amount)
        .bind(transaction.transaction_type.as_str())
        .bind(&transaction.category_id)
        .bind(format_timestamp(&transaction.date))
        .bind(format_timestamp(&transaction.created_at))
        .bind(format_timestamp(&transaction.updated_at))
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn get_transaction(&self, transaction_id: &str) -> Result<Option<Transaction>> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, title, description, amount, type, category_id, date, created_at, updated_at
            FROM transactions
            WHERE id = ?
            "#,
        )
        .bind(transaction_id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::from_row).transpose()
    }

    async fn list_transactions(&self) -> Result<Vec<Transaction>> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, title, description, amount, type, category_id, date, created_at, updated_at
            FROM transactions
            ORDER BY ROWID ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::from_row).collect()
    }

    async fn update_transaction(&self, transaction: &Transaction) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE transactions
            SET user_id = ?, title = ?, description = ?, amount = ?, type = ?,
                category_id = ?, date = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&transaction.user_id)
        .bind(&transaction.title)
        .bind(&transaction.description)
        .bind(transaction.amount)
        .bind(transaction.transaction_type.as_str())
        .bind(&transaction.category_id)
        .bind(format_timestamp(&transaction.date))
        .bind(format_timestamp(&transaction.updated_at))
        .bind(&transaction.id)
        .execute(self.db.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_transaction(&self, transaction_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM transactions WHERE id = ?")
            .bind(transaction_id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
