//! # SQLite Storage Module
//!
//! SQLite-backed implementations of the storage traits, built on an `sqlx` pool.

pub mod category_repository;
pub mod connection;
pub mod transaction_repository;
pub mod user_repository;

pub use category_repository::CategoryRepository;
pub use connection::DbConnection;
pub use transaction_repository::TransactionRepository;
pub use user_repository::UserRepository;
