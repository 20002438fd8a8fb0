//! 사용자 주소 DTO
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dto::address::to_rfc3339;
use crate::domain::entities::{Entity, Status, UserAddress};
use crate::utils::string_utils::deserialize_optional_string;

/// 사용자 주소 등록 요청
///
/// 네 단계의 주소 ID는 모두 존재하고 삭제되지 않은 엔티티를 가리켜야 합니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserAddressRequest {
    #[validate(length(min = 1, message = "state_id가 필요합니다"))]
    pub state_id: String,

    #[validate(length(min = 1, message = "city_id가 필요합니다"))]
    pub city_id: String,

    #[validate(length(min = 1, message = "neighborhood_id가 필요합니다"))]
    pub neighborhood_id: String,

    #[validate(length(min = 1, message = "place_id가 필요합니다"))]
    pub place_id: String,

    #[validate(length(min = 1, max = 200, message = "거리명은 1-200자 사이여야 합니다"))]
    pub street: String,

    #[validate(length(min = 1, max = 20, message = "번지는 1-20자 사이여야 합니다"))]
    pub number: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 200, message = "상세 주소는 200자 이하여야 합니다"))]
    pub complement: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserAddressResponse {
    pub id: String,
    pub state_id: String,
    pub city_id: String,
    pub neighborhood_id: String,
    pub place_id: String,
    pub street: String,
    pub number: String,
    pub complement: Option<String>,
    pub status: Status,
    pub created_at: String,
    pub updated_at: String,
}

impl From<UserAddress> for UserAddressResponse {
    fn from(address: UserAddress) -> Self {
        Self {
            id: address.id_string(),
            state_id: address.state_id.to_hex(),
            city_id: address.city_id.to_hex(),
            neighborhood_id: address.neighborhood_id.to_hex(),
            place_id: address.place_id.to_hex(),
            street: address.street,
            number: address.number,
            complement: address.complement,
            status: address.status,
            created_at: to_rfc3339(address.created_at),
            updated_at: to_rfc3339(address.updated_at),
        }
    }
}
