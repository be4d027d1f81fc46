//! Error types surfaced by the domain services.
use thiserror::Error;

/// A request field that failed validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("amount must be a number greater than or equal to zero")]
    InvalidAmount,
    #[error("type must be income or expense, got '{0}'")]
    UnknownTransactionType(String),
    #[error("{field} must be an ISO 8601 date, got '{value}'")]
    InvalidDate { field: &'static str, value: String },
    #[error("{field} must be a valid UUID v4, got '{value}'")]
    InvalidUuid { field: &'static str, value: String },
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },
    #[error("{0}")]
    Conflict(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        DomainError::NotFound {
            entity,
            id: id.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
