//! User Entity Implementation
//!
//! 이메일/비밀번호 기반 로컬 계정만 지원하는 사용자 모델입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Entity, Lifecycle, Status};
use crate::domain::models::pagination::SortableEntity;

/// 사용자 역할
///
/// 현재 인가 정책은 인증 여부만 확인하며, 역할은 저장만 됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Customer,
}

/// 사용자 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    /// 정규화된 이메일 (trim + 소문자). 삭제되지 않은 사용자 사이에서 유일
    pub email: String,
    /// bcrypt 해시
    pub password_hash: String,
    pub role: Role,
    pub status: Status,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// 새 고객 계정을 생성합니다. 역할은 `Customer`, 상태는 `Active`입니다.
    pub fn new_customer(name: String, email: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            email,
            password_hash,
            role: Role::Customer,
            status: Status::Active,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for User {
    const COLLECTION: &'static str = "users";

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }
}

impl Lifecycle for User {
    fn status(&self) -> Status {
        self.status
    }
}

impl SortableEntity for User {
    const SORT_FIELDS: &'static [(&'static str, &'static str)] = &[
        ("id", "_id"),
        ("name", "name"),
        ("email", "email"),
        ("created_at", "created_at"),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_customer_defaults() {
        let user = User::new_customer("Ana".into(), "ana@example.com".into(), "hash".into());

        assert_eq!(user.role, Role::Customer);
        assert_eq!(user.status, Status::Active);
        assert!(user.id.is_none());
        assert_eq!(user.id_string(), "");
    }
}
