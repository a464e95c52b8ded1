//! Data models for user accounts

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// User account. Created once at registration and read thereafter; only the
/// credential hash may ever change.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct User {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    /// Argon2 PHC string. Never leaves the service.
    #[serde(skip)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_is_never_serialized() {
        let user = User {
            user_id: 7,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "$argon2id$v=19$secret".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("argon2"));
        assert!(!json.contains("password_hash"));
        assert!(json.contains("alice@example.com"));
    }
}
