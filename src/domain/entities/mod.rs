//! # Domain Entities
//!
//! MongoDB에 저장되는 핵심 도메인 엔티티입니다.
//!
//! - [`users`] - 사용자 계정
//! - [`address`] - 주(State) → 도시(City) → 동네(Neighborhood) → 장소(Place) 계층
//! - [`user_address`] - 사용자가 등록한 주소
//! - [`status`] - 논리 삭제 상태

pub mod status;
pub mod users;
pub mod address;
pub mod user_address;

pub use status::{Lifecycle, Status};
pub use users::user::{Role, User};
pub use address::{AddressKind, AddressNode, AddressRecord, City, Neighborhood, Place, PlaceType, State};
pub use user_address::{AddressRefs, UserAddress};

use mongodb::bson::oid::ObjectId;

/// 컬렉션에 저장되는 엔티티
pub trait Entity {
    /// MongoDB 컬렉션 이름
    const COLLECTION: &'static str;

    fn id(&self) -> Option<ObjectId>;

    fn set_id(&mut self, id: ObjectId);

    /// ID 문자열로 변환
    fn id_string(&self) -> String {
        self.id().map(|id| id.to_hex()).unwrap_or_default()
    }
}
