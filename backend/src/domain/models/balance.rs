//! Derived balance reports. Built per request, never stored.
use super::transaction::Transaction;

/// Display name used when a transaction's category can't be resolved.
pub const UNCATEGORIZED: &str = "uncategorized";

#[derive(Debug, Clone, PartialEq)]
pub struct PeriodBalance {
    /// "YYYY-MM"
    pub period: String,
    pub income: f64,
    pub expense: f64,
    /// income - expense
    pub total: f64,
    pub transactions: Vec<Transaction>,
}

impl PeriodBalance {
    pub fn new(period: String) -> Self {
        Self {
            period,
            income: 0.0,
            expense: 0.0,
            total: 0.0,
            transactions: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBalance {
    pub category_id: String,
    pub category_name: String,
    /// Signed sum of member transactions
    pub total: f64,
    pub transactions: Vec<Transaction>,
}
