pub mod balance;
pub mod category;
pub mod transaction;
pub mod user;

pub use balance::{CategoryBalance, PeriodBalance, UNCATEGORIZED};
pub use category::Category;
pub use transaction::{Transaction, TransactionType};
pub use user::User;
