use serde::{Deserialize, Serialize};

use crate::domain::dto::address::to_rfc3339;
use crate::domain::entities::{Entity, Role, Status, User};

/// 사용자 응답 DTO
///
/// 비밀번호 해시는 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: Status,
    /// RFC 3339
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id_string(),
            created_at: to_rfc3339(user.created_at),
            updated_at: to_rfc3339(user.updated_at),
            name: user.name,
            email: user.email,
            role: user.role,
            status: user.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_response_hides_password_hash() {
        let mut user = User::new_customer("Ana".into(), "ana@example.com".into(), "$2b$hash".into());
        let id = ObjectId::new();
        user.set_id(id);

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert_eq!(json["id"], id.to_hex());
        assert_eq!(json["role"], "customer");
        assert_eq!(json["status"], "active");
        assert!(json.get("password_hash").is_none());
        assert!(json["created_at"].as_str().unwrap().contains('T'));
    }
}
