use crate::domain::models::User as DomainUser;
use crate::domain::timestamps::format_timestamp;
use shared::User as SharedUser;

pub struct UserMapper;

impl UserMapper {
    pub fn to_dto(domain: DomainUser) -> SharedUser {
        SharedUser {
            id: domain.id,
            email: domain.email,
            name: domain.name,
            created_at: format_timestamp(&domain.created_at),
            updated_at: format_timestamp(&domain.updated_at),
        }
    }
}
