//! 동네(Neighborhood) 엔티티

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use super::{AddressKind, AddressNode};
use crate::domain::entities::{Entity, Lifecycle, Status};
use crate::domain::models::pagination::SortableEntity;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Neighborhood {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub city_id: ObjectId,
    pub status: Status,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Neighborhood {
    pub fn new(name: String, city_id: ObjectId) -> Self {
        let now = DateTime::now();
        Self {
            id: None,
            name,
            city_id,
            status: Status::Active,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for Neighborhood {
    const COLLECTION: &'static str = "neighborhoods";

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }
}

impl Lifecycle for Neighborhood {
    fn status(&self) -> Status {
        self.status
    }
}

impl AddressNode for Neighborhood {
    const KIND: AddressKind = AddressKind::Neighborhood;
}

impl SortableEntity for Neighborhood {
    const SORT_FIELDS: &'static [(&'static str, &'static str)] = &[
        ("id", "_id"),
        ("name", "name"),
        ("city_id", "city_id"),
        ("created_at", "created_at"),
        ("updated_at", "updated_at"),
    ];
}
