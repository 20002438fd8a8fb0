//! 주(State) 엔티티

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use super::{AddressKind, AddressNode};
use crate::domain::entities::{Entity, Lifecycle, Status};
use crate::domain::models::pagination::SortableEntity;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct State {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    /// 두 글자 대문자 약어. 삭제되지 않은 주 사이에서 유일
    pub uf: String,
    pub status: Status,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl State {
    pub fn new(name: String, uf: String) -> Self {
        let now = DateTime::now();
        Self {
            id: None,
            name,
            uf,
            status: Status::Active,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for State {
    const COLLECTION: &'static str = "states";

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }
}

impl Lifecycle for State {
    fn status(&self) -> Status {
        self.status
    }
}

impl AddressNode for State {
    const KIND: AddressKind = AddressKind::State;
}

impl SortableEntity for State {
    const SORT_FIELDS: &'static [(&'static str, &'static str)] = &[
        ("id", "_id"),
        ("name", "name"),
        ("uf", "uf"),
        ("created_at", "created_at"),
        ("updated_at", "updated_at"),
    ];
}
