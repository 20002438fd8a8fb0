//! 주소 계층 응답 DTO
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::Serialize;

use crate::domain::entities::{
    AddressRecord, City, Entity, Neighborhood, Place, PlaceType, State, Status,
};

/// BSON 시각을 RFC 3339 문자열로 변환합니다.
pub fn to_rfc3339(value: DateTime) -> String {
    value.try_to_rfc3339_string().unwrap_or_default()
}

fn hex(id: ObjectId) -> String {
    id.to_hex()
}

#[derive(Debug, Clone, Serialize)]
pub struct StateResponse {
    pub id: String,
    pub name: String,
    pub uf: String,
    pub status: Status,
    pub created_at: String,
    pub updated_at: String,
}

impl From<State> for StateResponse {
    fn from(state: State) -> Self {
        Self {
            id: state.id_string(),
            name: state.name,
            uf: state.uf,
            status: state.status,
            created_at: to_rfc3339(state.created_at),
            updated_at: to_rfc3339(state.updated_at),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CityResponse {
    pub id: String,
    pub name: String,
    pub state_id: String,
    pub status: Status,
    pub created_at: String,
    pub updated_at: String,
}

impl From<City> for CityResponse {
    fn from(city: City) -> Self {
        Self {
            id: city.id_string(),
            name: city.name,
            state_id: hex(city.state_id),
            status: city.status,
            created_at: to_rfc3339(city.created_at),
            updated_at: to_rfc3339(city.updated_at),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NeighborhoodResponse {
    pub id: String,
    pub name: String,
    pub city_id: String,
    pub status: Status,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Neighborhood> for NeighborhoodResponse {
    fn from(neighborhood: Neighborhood) -> Self {
        Self {
            id: neighborhood.id_string(),
            name: neighborhood.name,
            city_id: hex(neighborhood.city_id),
            status: neighborhood.status,
            created_at: to_rfc3339(neighborhood.created_at),
            updated_at: to_rfc3339(neighborhood.updated_at),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlaceResponse {
    pub id: String,
    pub name: String,
    pub postal_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub neighborhood_id: String,
    #[serde(rename = "type")]
    pub place_type: PlaceType,
    pub status: Status,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Place> for PlaceResponse {
    fn from(place: Place) -> Self {
        Self {
            id: place.id_string(),
            name: place.name,
            postal_code: place.postal_code,
            latitude: place.latitude,
            longitude: place.longitude,
            neighborhood_id: hex(place.neighborhood_id),
            place_type: place.place_type,
            status: place.status,
            created_at: to_rfc3339(place.created_at),
            updated_at: to_rfc3339(place.updated_at),
        }
    }
}

/// 단계와 무관하게 하나의 엔드포인트에서 반환되는 응답
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AddressResponse {
    State(StateResponse),
    City(CityResponse),
    Neighborhood(NeighborhoodResponse),
    Place(PlaceResponse),
}

impl From<State> for AddressResponse {
    fn from(value: State) -> Self {
        AddressResponse::State(value.into())
    }
}

impl From<City> for AddressResponse {
    fn from(value: City) -> Self {
        AddressResponse::City(value.into())
    }
}

impl From<Neighborhood> for AddressResponse {
    fn from(value: Neighborhood) -> Self {
        AddressResponse::Neighborhood(value.into())
    }
}

impl From<Place> for AddressResponse {
    fn from(value: Place) -> Self {
        AddressResponse::Place(value.into())
    }
}

impl From<AddressRecord> for AddressResponse {
    fn from(record: AddressRecord) -> Self {
        match record {
            AddressRecord::State(state) => state.into(),
            AddressRecord::City(city) => city.into(),
            AddressRecord::Neighborhood(neighborhood) => neighborhood.into(),
            AddressRecord::Place(place) => place.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_response_has_flat_shape() {
        let state_id = ObjectId::new();
        let mut city = City::new("Campinas".into(), state_id);
        city.set_id(ObjectId::new());

        let json = serde_json::to_value(AddressResponse::from(city)).unwrap();

        assert_eq!(json["name"], "Campinas");
        assert_eq!(json["state_id"], state_id.to_hex());
        assert_eq!(json["status"], "active");
        assert!(json.get("City").is_none());
    }

    #[test]
    fn test_place_type_field_name() {
        let place = Place::new(
            "Praça".into(),
            "01001-000".into(),
            -23.55,
            -46.63,
            ObjectId::new(),
            PlaceType::Complete,
        );
        let json = serde_json::to_value(PlaceResponse::from(place)).unwrap();

        assert_eq!(json["type"], "COMPLETE");
        assert_eq!(json["id"], "");
    }
}
