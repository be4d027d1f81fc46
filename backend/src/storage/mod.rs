//! # Storage Module
//!
//! Handles all data persistence for users, categories and transactions.
//!
//! The domain layer only sees the traits in [`traits`]; a [`Connection`]
//! hands out repositories for one concrete backend:
//!
//! - **sqlite**: `sqlx` SQLite pool, schema created on connect
//! - **memory**: process-local vectors, lost on restart

pub mod memory;
pub mod sqlite;
pub mod traits;

pub use memory::MemoryConnection;
pub use sqlite::DbConnection;
pub use traits::{CategoryStorage, Connection, EmailTaken, TransactionStorage, UserStorage};
