use std::sync::Arc;
use tracing::info;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::Category;
use crate::domain::timestamps;
use crate::domain::validation::require_text;
use crate::storage::{CategoryStorage, Connection};
use shared::{CreateCategoryRequest, UpdateCategoryRequest};

#[derive(Clone)]
pub struct CategoryService {
    category_repository: Arc<dyn CategoryStorage>,
}

impl CategoryService {
    pub fn new(connection: &dyn Connection) -> Self {
        Self {
            category_repository: connection.create_category_repository(),
        }
    }

    pub async fn create(&self, request: CreateCategoryRequest) -> DomainResult<Category> {
        let now = timestamps::now();
        let category = Category {
            id: Category::generate_id(),
            name: require_text("name", &request.name)?,
            description: request.description.filter(|d| !d.trim().is_empty()),
            created_at: now,
            updated_at: now,
        };

        self.category_repository.store_category(&category).await?;

        info!("Created category {} ({})", category.id, category.name);
        Ok(category)
    }

    /// All categories ordered by name.
    pub async fn find_all(&self) -> DomainResult<Vec<Category>> {
        Ok(self.category_repository.list_categories().await?)
    }

    pub async fn find_one(&self, id: &str) -> DomainResult<Category> {
        self.category_repository
            .get_category(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Category", id))
    }

    pub async fn update(&self, id: &str, request: UpdateCategoryRequest) -> DomainResult<Category> {
        let mut category = self.find_one(id).await?;

        if let Some(name) = request.name {
            category.name = require_text("name", &name)?;
        }
        if let Some(description) = request.description {
            category.description = Some(description).filter(|d| !d.trim().is_empty());
        }
        category.updated_at = timestamps::now();

        if !self.category_repository.update_category(&category).await? {
            return Err(DomainError::not_found("Category", id));
        }

        info!("Updated category {}", id);
        Ok(category)
    }

    /// Transactions that reference the category keep their `category_id`.
    pub async fn remove(&self, id: &str) -> DomainResult<()> {
        if !self.category_repository.delete_category(id).await? {
            return Err(DomainError::not_found("Category", id));
        }
        info!("Removed category {}", id);
        Ok(())
    }
}
