use crate::domain::models::Transaction as DomainTransaction;
use crate::domain::timestamps::format_timestamp;
use shared::Transaction as SharedTransaction;

pub struct TransactionMapper;

impl TransactionMapper {
    pub fn to_dto(domain: DomainTransaction) -> SharedTransaction {
        SharedTransaction {
            id: domain.id,
            user_id: domain.user_id,
            title: domain.title,
            description: domain.description,
            amount: domain.amount,
            transaction_type: domain.transaction_type.into(),
            category_id: domain.category_id,
            date: format_timestamp(&domain.date),
            created_at: format_timestamp(&domain.created_at),
            updated_at: format_timestamp(&domain.updated_at),
        }
    }

    pub fn to_dtos(domain: Vec<DomainTransaction>) -> Vec<SharedTransaction> {
        domain.into_iter().map(Self::to_dto).collect()
    }
}
