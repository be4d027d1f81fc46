//! # Domain Module
//!
//! Business logic for the finances backend, independent of HTTP and of the
//! storage engine.
//!
//! ## Module Organization
//!
//! - **balance_service**: Total, per-month and per-category balance reports
//! - **transaction_service**: Transaction CRUD and field validation
//! - **category_service**: Category CRUD
//! - **user_service**: User CRUD with unique emails
//! - **models**: Domain entities and report types
//!
//! ## Business Rules
//!
//! - Amounts are non-negative; income adds to a balance and expense subtracts
//! - Balances are derived on every request and never stored
//! - Categories are referenced by id only, so deleting one leaves its
//!   transactions in place
//! - Periods are calendar months in UTC

pub mod balance_service;
pub mod category_service;
pub mod errors;
pub mod models;
pub mod timestamps;
pub mod transaction_service;
pub mod user_service;
pub mod validation;

pub use balance_service::BalanceService;
pub use category_service::CategoryService;
pub use errors::{DomainError, DomainResult, ValidationError};
pub use transaction_service::TransactionService;
pub use user_service::UserService;
