//! Conversions from domain models to the wire DTOs in `shared`.
pub mod balance_mapper;
pub mod category_mapper;
pub mod transaction_mapper;
pub mod user_mapper;

pub use balance_mapper::BalanceMapper;
pub use category_mapper::CategoryMapper;
pub use transaction_mapper::TransactionMapper;
pub use user_mapper::UserMapper;
