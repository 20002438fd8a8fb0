//! 장소(Place) 엔티티
//!
//! 우편번호와 좌표를 가진 주소 계층의 최하위 단계입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use super::{AddressKind, AddressNode};
use crate::domain::entities::{Entity, Lifecycle, Status};
use crate::domain::models::pagination::SortableEntity;

/// 장소 정보의 완성도
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PlaceType {
    #[default]
    Incomplete,
    Complete,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub postal_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub neighborhood_id: ObjectId,
    #[serde(rename = "type")]
    pub place_type: PlaceType,
    pub status: Status,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Place {
    pub fn new(
        name: String,
        postal_code: String,
        latitude: f64,
        longitude: f64,
        neighborhood_id: ObjectId,
        place_type: PlaceType,
    ) -> Self {
        let now = DateTime::now();
        Self {
            id: None,
            name,
            postal_code,
            latitude,
            longitude,
            neighborhood_id,
            place_type,
            status: Status::Active,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for Place {
    const COLLECTION: &'static str = "places";

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }
}

impl Lifecycle for Place {
    fn status(&self) -> Status {
        self.status
    }
}

impl AddressNode for Place {
    const KIND: AddressKind = AddressKind::Place;
}

impl SortableEntity for Place {
    const SORT_FIELDS: &'static [(&'static str, &'static str)] = &[
        ("id", "_id"),
        ("name", "name"),
        ("postal_code", "postal_code"),
        ("neighborhood_id", "neighborhood_id"),
        ("type", "type"),
        ("created_at", "created_at"),
        ("updated_at", "updated_at"),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_type_wire_format() {
        assert_eq!(serde_json::to_string(&PlaceType::Incomplete).unwrap(), "\"INCOMPLETE\"");
        let parsed: PlaceType = serde_json::from_str("\"COMPLETE\"").unwrap();
        assert_eq!(parsed, PlaceType::Complete);
    }
}
