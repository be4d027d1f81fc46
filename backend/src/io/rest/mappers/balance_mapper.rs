use super::transaction_mapper::TransactionMapper;
use crate::domain::models::{CategoryBalance, PeriodBalance};
use shared::{BalanceByCategory, BalanceByPeriod, TotalBalanceResponse};

pub struct BalanceMapper;

impl BalanceMapper {
    pub fn to_total_response(total: f64) -> TotalBalanceResponse {
        TotalBalanceResponse { total }
    }

    pub fn to_period_dto(domain: PeriodBalance) -> BalanceByPeriod {
        BalanceByPeriod {
            period: domain.period,
            income: domain.income,
            expense: domain.expense,
            total: domain.total,
            transactions: TransactionMapper::to_dtos(domain.transactions),
        }
    }

    pub fn to_category_dto(domain: CategoryBalance) -> BalanceByCategory {
        BalanceByCategory {
            category_id: domain.category_id,
            category_name: domain.category_name,
            total: domain.total,
            transactions: TransactionMapper::to_dtos(domain.transactions),
        }
    }
}
