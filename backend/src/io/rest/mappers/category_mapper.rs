use crate::domain::models::Category as DomainCategory;
use crate::domain::timestamps::format_timestamp;
use shared::Category as SharedCategory;

pub struct CategoryMapper;

impl CategoryMapper {
    pub fn to_dto(domain: DomainCategory) -> SharedCategory {
        SharedCategory {
            id: domain.id,
            name: domain.name,
            description: domain.description,
            created_at: format_timestamp(&domain.created_at),
            updated_at: format_timestamp(&domain.updated_at),
        }
    }
}
