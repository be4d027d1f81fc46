//! Balance reports for a single user.
//!
//! The calculations are pure functions over a slice of transactions so they can
//! be tested without storage. [`BalanceService`] takes one snapshot from the
//! stores per call and hands it to them; nothing is written back.

use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::info;

use crate::domain::errors::DomainResult;
use crate::domain::models::{CategoryBalance, PeriodBalance, Transaction, TransactionType, UNCATEGORIZED};
use crate::storage::{CategoryStorage, Connection, TransactionStorage};

/// Net balance of `user_id`: income adds, expense subtracts, starting at zero.
pub fn total_balance(transactions: &[Transaction], user_id: &str) -> f64 {
    transactions
        .iter()
        .filter(|t| t.user_id == user_id)
        .fold(0.0, |acc, t| acc + t.signed_amount())
}

/// Groups the user's transactions dated within `[start_date, end_date]` by
/// calendar month. Months without transactions are omitted. Sorted ascending
/// by period.
pub fn balance_by_period(
    transactions: &[Transaction],
    user_id: &str,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
) -> Vec<PeriodBalance> {
    let mut periods: BTreeMap<String, PeriodBalance> = BTreeMap::new();

    for transaction in transactions
        .iter()
        .filter(|t| t.user_id == user_id && t.date >= start_date && t.date <= end_date)
    {
        let period = transaction.period();
        let balance = periods
            .entry(period.clone())
            .or_insert_with(|| PeriodBalance::new(period));

        match transaction.transaction_type {
            TransactionType::Income => balance.income += transaction.amount,
            TransactionType::Expense => balance.expense += transaction.amount,
        }
        balance.transactions.push(transaction.clone());
    }

    periods
        .into_values()
        .map(|mut balance| {
            balance.total = balance.income - balance.expense;
            balance
        })
        .collect()
}

/// Groups the user's transactions by category, highest net total first.
///
/// `category_names` maps category id to display name; ids missing from it get
/// [`UNCATEGORIZED`]. Equal totals are ordered by category id.
pub fn balance_by_category(
    transactions: &[Transaction],
    user_id: &str,
    category_names: &HashMap<String, String>,
) -> Vec<CategoryBalance> {
    let mut groups: Vec<CategoryBalance> = Vec::new();
    let mut index_by_category: HashMap<&str, usize> = HashMap::new();

    for transaction in transactions.iter().filter(|t| t.user_id == user_id) {
        let index = *index_by_category
            .entry(transaction.category_id.as_str())
            .or_insert_with(|| {
                let category_name = category_names
                    .get(&transaction.category_id)
                    .filter(|name| !name.is_empty())
                    .cloned()
                    .unwrap_or_else(|| UNCATEGORIZED.to_string());
                groups.push(CategoryBalance {
                    category_id: transaction.category_id.clone(),
                    category_name,
                    total: 0.0,
                    transactions: Vec::new(),
                });
                groups.len() - 1
            });

        let group = &mut groups[index];
        group.total += transaction.signed_amount();
        group.transactions.push(transaction.clone());
    }

    groups.sort_by(|a, b| {
        b.total
            .total_cmp(&a.total)
            .then_with(|| a.category_id.cmp(&b.category_id))
    });
    groups
}

/// Service that loads snapshots from storage and runs the balance calculations
#[derive(Clone)]
pub struct BalanceService {
    transaction_repository: Arc<dyn TransactionStorage>,
    category_repository: Arc<dyn CategoryStorage>,
}

impl BalanceService {
    pub fn new(connection: &dyn Connection) -> Self {
        Self {
            transaction_repository: connection.create_transaction_repository(),
            category_repository: connection.create_category_repository(),
        }
    }

    pub async fn total_balance(&self, user_id: &str) -> DomainResult<f64> {
        let transactions = self.transaction_repository.list_transactions().await?;
        let total = total_balance(&transactions, user_id);

        info!("Total balance for user {}: {:.2}", user_id, total);
        Ok(total)
    }

    pub async fn balance_by_period(
        &self,
        user_id: &str,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> DomainResult<Vec<PeriodBalance>> {
        let transactions = self.transaction_repository.list_transactions().await?;
        let periods = balance_by_period(&transactions, user_id, start_date, end_date);

        info!(
            "Balance by period for user {} from {} to {}: {} periods",
            user_id,
            start_date,
            end_date,
            periods.len()
        );
        Ok(periods)
    }

    /// Category names are resolved against the categories that exist right now.
    pub async fn balance_by_category(&self, user_id: &str) -> DomainResult<Vec<CategoryBalance>> {
        let transactions = self.transaction_repository.list_transactions().await?;
        let category_names: HashMap<String, String> = self
            .category_repository
            .list_categories()
            .await?
            .into_iter()
            .map(|category| (category.id, category.name))
            .collect();

        let groups = balance_by_category(&transactions, user_id, &category_names);

        info!("Balance by category for user {}: {} categories", user_id, groups.len());
        Ok(groups)
    }
}
