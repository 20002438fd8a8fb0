//! 사용자 주소 엔티티
//!
//! 사용자가 주소 계층의 각 단계를 골라 등록한 배송지입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Entity, Lifecycle, Status};
use crate::domain::models::pagination::SortableEntity;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAddress {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: ObjectId,
    pub state_id: ObjectId,
    pub city_id: ObjectId,
    pub neighborhood_id: ObjectId,
    pub place_id: ObjectId,
    pub street: String,
    pub number: String,
    #[serde(default)]
    pub complement: Option<String>,
    pub status: Status,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

/// 검증된 주소 계층 참조
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressRefs {
    pub state_id: ObjectId,
    pub city_id: ObjectId,
    pub neighborhood_id: ObjectId,
    pub place_id: ObjectId,
}

impl UserAddress {
    pub fn new(
        user_id: ObjectId,
        refs: AddressRefs,
        street: String,
        number: String,
        complement: Option<String>,
    ) -> Self {
        let now = DateTime::now();
        Self {
            id: None,
            user_id,
            state_id: refs.state_id,
            city_id: refs.city_id,
            neighborhood_id: refs.neighborhood_id,
            place_id: refs.place_id,
            street,
            number,
            complement,
            status: Status::Active,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for UserAddress {
    const COLLECTION: &'static str = "user_addresses";

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }
}

impl Lifecycle for UserAddress {
    fn status(&self) -> Status {
        self.status
    }
}

impl SortableEntity for UserAddress {
    const SORT_FIELDS: &'static [(&'static str, &'static str)] = &[
        ("id", "_id"),
        ("street", "street"),
        ("number", "number"),
        ("created_at", "created_at"),
        ("updated_at", "updated_at"),
    ];
}
