use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A local user record. Credentials live with the identity provider.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    /// Unique across all users
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }
}
