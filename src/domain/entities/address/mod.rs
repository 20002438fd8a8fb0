//! 주소 계층 엔티티
//!
//! ```text
//! State ─┬─ City ─┬─ Neighborhood ─┬─ Place
//!        │        │                │
//!    (uf 유일)  (state_id)       (city_id)     (neighborhood_id)
//! ```
//!
//! 각 엔티티는 바로 위 부모의 ID만 참조합니다. 부모가 나중에 삭제되어도
//! 이미 생성된 자식은 그대로 유지됩니다.

pub mod state;
pub mod city;
pub mod neighborhood;
pub mod place;

pub use state::State;
pub use city::City;
pub use neighborhood::Neighborhood;
pub use place::{Place, PlaceType};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Entity, Lifecycle};

/// 주소 계층의 단계
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressKind {
    State,
    City,
    Neighborhood,
    Place,
}

impl AddressKind {
    /// 에러 메시지에 쓰이는 이름
    pub fn label(&self) -> &'static str {
        match self {
            AddressKind::State => "주",
            AddressKind::City => "도시",
            AddressKind::Neighborhood => "동네",
            AddressKind::Place => "장소",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AddressKind::State => "state",
            AddressKind::City => "city",
            AddressKind::Neighborhood => "neighborhood",
            AddressKind::Place => "place",
        }
    }
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 주소 계층의 한 단계에 속하는 엔티티
pub trait AddressNode: Entity + Lifecycle {
    const KIND: AddressKind;
}

/// 단계와 관계없이 다루는 주소 엔티티
#[derive(Debug, Clone)]
pub enum AddressRecord {
    State(State),
    City(City),
    Neighborhood(Neighborhood),
    Place(Place),
}

impl AddressRecord {
    pub fn kind(&self) -> AddressKind {
        match self {
            AddressRecord::State(_) => AddressKind::State,
            AddressRecord::City(_) => AddressKind::City,
            AddressRecord::Neighborhood(_) => AddressKind::Neighborhood,
            AddressRecord::Place(_) => AddressKind::Place,
        }
    }
}

impl From<State> for AddressRecord {
    fn from(value: State) -> Self {
        AddressRecord::State(value)
    }
}

impl From<City> for AddressRecord {
    fn from(value: City) -> Self {
        AddressRecord::City(value)
    }
}

impl From<Neighborhood> for AddressRecord {
    fn from(value: Neighborhood) -> Self {
        AddressRecord::Neighborhood(value)
    }
}

impl From<Place> for AddressRecord {
    fn from(value: Place) -> Self {
        AddressRecord::Place(value)
    }
}
