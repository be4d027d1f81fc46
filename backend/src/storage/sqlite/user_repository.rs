use anyhow::Result;
use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row};

use super::connection::DbConnection;
use crate::domain::models::User;
use crate::domain::timestamps::{format_timestamp, parse_timestamp};
use crate::storage::traits::{EmailTaken, UserStorage};

/// Repository for user operations
#[derive(Clone)]
pub struct UserRepository {
    db: DbConnection,
}

impl UserRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn from_row(row: &SqliteRow) -> Result<User> {
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        Ok(User {
            id: row.try_get("id")?,
            email: row.try_get("email")?,
            name: row.try_get("name")?,
            created_at: parse_timestamp(&created_at)?,
            updated_at: parse_timestamp(&updated_at)?,
        })
    }

    /// Maps a `UNIQUE` failure on `users.email` to [`EmailTaken`].
    fn write_error(error: sqlx::Error, email: &str) -> anyhow::Error {
        match &error {
            sqlx::Error::Database(db_error)
                if db_error.is_unique_violation() && db_error.message().contains("users.email") =>
            {
                EmailTaken(email.to_string()).into()
            }
            _ => error.into(),
        }
    }
}

#[async_trait]
impl UserStorage for UserRepository {
    async fn store_user(&self, user: &User) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, name, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.id)
        .bind(&user.email)
        .bind(&user.name)
        .bind(format_timestamp(&user.created_at))
        .bind(format_timestamp(&user.updated_at))
        .execute(self.db.pool())
        .await
        .map_err(|e| Self::write_error(e, &user.email))?;
        Ok(())
    }

    async fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            "SELECT id, email, name, created_at, updated_at FROM users WHERE id = ?",
        )
        .bind(user_id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::from_row).transpose()
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            "SELECT id, email, name, created_at, updated_at FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::from_row).transpose()
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        let rows = sqlx::query(
            "SELECT id, email, name, created_at, updated_at FROM users ORDER BY ROWID ASC",
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::from_row).collect()
    }

    async fn update_user(&self, user: &User) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE users SET email = ?, name = ?, updated_at = ? WHERE id = ?",
        )
        .bind(&user.email)
        .bind(&user.name)
        .bind(format_timestamp(&user.updated_at))
        .bind(&user.id)
        .execute(self.db.pool())
        .await
        .map_err(|e| Self::write_error(e, &user.email))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_user(&self, user_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(user_id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
