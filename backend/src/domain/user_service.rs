use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::User;
use crate::domain::timestamps;
use crate::domain::validation::{require_text, validate_email};
use crate::storage::{Connection, EmailTaken, UserStorage};
use shared::{CreateUserRequest, UpdateUserRequest};

#[derive(Clone)]
pub struct UserService {
    user_repository: Arc<dyn UserStorage>,
}

/// A concurrent writer can claim the email between the availability check and
/// the write; the store reports that as [`EmailTaken`].
fn email_conflict(error: anyhow::Error) -> DomainError {
    match error.downcast_ref::<EmailTaken>() {
        Some(taken) => {
            warn!("{}", taken);
            DomainError::Conflict(taken.to_string())
        }
        None => DomainError::Storage(error),
    }
}

impl UserService {
    pub fn new(connection: &dyn Connection) -> Self {
        Self {
            user_repository: connection.create_user_repository(),
        }
    }

    /// Fails with `Conflict` when another user holds `email`.
    async fn ensure_email_available(&self, email: &str, current_id: Option<&str>) -> DomainResult<()> {
        match self.user_repository.get_user_by_email(email).await? {
            Some(existing) if Some(existing.id.as_str()) != current_id => {
                warn!("Email {} is already in use by user {}", email, existing.id);
                Err(DomainError::Conflict(format!("Email {} is already in use", email)))
            }
            _ => Ok(()),
        }
    }

    pub async fn create(&self, request: CreateUserRequest) -> DomainResult<User> {
        let email = validate_email(&request.email)?;
        let name = require_text("name", &request.name)?;
        self.ensure_email_available(&email, None).await?;

        let now = timestamps::now();
        let user = User {
            id: User::generate_id(),
            email,
            name,
            created_at: now,
            updated_at: now,
        };
        self.user_repository
            .store_user(&user)
            .await
            .map_err(email_conflict)?;

        info!("Created user {} <{}>", user.id, user.email);
        Ok(user)
    }

    pub async fn find_all(&self) -> DomainResult<Vec<User>> {
        Ok(self.user_repository.list_users().await?)
    }

    pub async fn find_by_id(&self, id: &str) -> DomainResult<User> {
        self.user_repository
            .get_user(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", id))
    }

    pub async fn find_by_email(&self, email: &str) -> DomainResult<User> {
        self.user_repository
            .get_user_by_email(email.trim())
            .await?
            .ok_or_else(|| DomainError::not_found("User", email))
    }

    pub async fn update(&self, id: &str, request: UpdateUserRequest) -> DomainResult<User> {
        let mut user = self.find_by_id(id).await?;

        if let Some(email) = request.email {
            let email = validate_email(&email)?;
            self.ensure_email_available(&email, Some(id)).await?;
            user.email = email;
        }
        if let Some(name) = request.name {
            user.name = require_text("name", &name)?;
        }
        user.updated_at = timestamps::now();

        if !self
            .user_repository
            .update_user(&user)
            .await
            .map_err(email_conflict)?
        {
            return Err(DomainError::not_found("User", id));
        }

        info!("Updated user {}", id);
        Ok(user)
    }

    pub async fn delete(&self, id: &str) -> DomainResult<()> {
        if !self.user_repository.delete_user(id).await? {
            return Err(DomainError::not_found("User", id));
        }
        info!("Deleted user {}", id);
        Ok(())
    }
}
