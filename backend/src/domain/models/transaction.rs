//! Domain model for a transaction.
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::errors::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    /// Applies the sign this type contributes to a balance.
    pub fn signed(&self, amount: f64) -> f64 {
        match self {
            TransactionType::Income => amount,
            TransactionType::Expense => -amount,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(ValidationError::UnknownTransactionType(other.to_string())),
        }
    }
}

impl From<shared::TransactionType> for TransactionType {
    fn from(value: shared::TransactionType) -> Self {
        match value {
            shared::TransactionType::Income => TransactionType::Income,
            shared::TransactionType::Expense => TransactionType::Expense,
        }
    }
}

impl From<TransactionType> for shared::TransactionType {
    fn from(value: TransactionType) -> Self {
        match value {
            TransactionType::Income => shared::TransactionType::Income,
            TransactionType::Expense => shared::TransactionType::Expense,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    /// Always >= 0
    pub amount: f64,
    pub transaction_type: TransactionType,
    /// Weak reference; the category may no longer exist
    pub category_id: String,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Contribution of this transaction to a balance.
    pub fn signed_amount(&self) -> f64 {
        self.transaction_type.signed(self.amount)
    }

    /// Calendar month bucket of the transaction date, e.g. "2024-03".
    pub fn period(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}
