//! 도시(City) 엔티티

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use super::{AddressKind, AddressNode};
use crate::domain::entities::{Entity, Lifecycle, Status};
use crate::domain::models::pagination::SortableEntity;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub state_id: ObjectId,
    pub status: Status,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl City {
    pub fn new(name: String, state_id: ObjectId) -> Self {
        let now = DateTime::now();
        Self {
            id: None,
            name,
            state_id,
            status: Status::Active,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for City {
    const COLLECTION: &'static str = "cities";

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }
}

impl Lifecycle for City {
    fn status(&self) -> Status {
        self.status
    }
}

impl AddressNode for City {
    const KIND: AddressKind = AddressKind::City;
}

impl SortableEntity for City {
    const SORT_FIELDS: &'static [(&'static str, &'static str)] = &[
        ("id", "_id"),
        ("name", "name"),
        ("state_id", "state_id"),
        ("created_at", "created_at"),
        ("updated_at", "updated_at"),
    ];
}
