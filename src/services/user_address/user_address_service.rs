//! # 사용자 주소 서비스
//!
//! 인증된 사용자 본인의 배송지를 등록, 조회, 삭제합니다.
//! 사용자는 토큰의 이메일로 식별하며, 다른 사용자의 주소는 존재하지 않는 것으로 취급합니다.

use std::sync::Arc;

use mongodb::bson::{oid::ObjectId, DateTime};
use validator::Validate;

use crate::{
    domain::{
        dto::user_address::{CreateUserAddressRequest, UserAddressResponse},
        entities::{AddressRefs, Status, UserAddress},
        models::pagination::{Page, PageRequest},
    },
    errors::{AppError, AppResult},
    repositories::{user_address::UserAddressRepository, users::UserStore},
    services::{
        address::address_service::persisted_id, hierarchy::HierarchyValidator,
        pagination::paginate,
    },
    utils::string_utils::{
        clean_optional_string, normalize_email, validate_required_string,
    },
};

pub struct UserAddressService {
    users: Arc<dyn UserStore>,
    addresses: Arc<UserAddressRepository>,
    hierarchy: Arc<HierarchyValidator>,
}

impl UserAddressService {
    pub fn new(
        users: Arc<dyn UserStore>,
        addresses: Arc<UserAddressRepository>,
        hierarchy: Arc<HierarchyValidator>,
    ) -> Self {
        Self {
            users,
            addresses,
            hierarchy,
        }
    }

    async fn owner_id(&self, email: &str) -> AppResult<ObjectId> {
        let user = self
            .users
            .find_by_email(&normalize_email(email))
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        persisted_id(&user)
    }

    /// 주소 등록
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 입력값 검증 실패, 참조한 주소 엔티티가 없거나 삭제됨
    /// * `AppError::NotFound` - 토큰의 사용자가 없거나 삭제됨
    pub async fn create(
        &self,
        email: &str,
        request: CreateUserAddressRequest,
    ) -> AppResult<UserAddressResponse> {
        request.validate()?;

        let user_id = self.owner_id(email).await?;
        let refs = resolve_refs(&self.hierarchy, &request).await?;
        let address = build_user_address(user_id, refs, request)?;

        let created = self.addresses.create(address).await?;
        log::info!("사용자 주소 등록: user={}, address={:?}", user_id, created.id);

        Ok(UserAddressResponse::from(created))
    }

    pub async fn get(&self, email: &str, id: &str) -> AppResult<UserAddressResponse> {
        let user_id = self.owner_id(email).await?;

        self.addresses
            .find_owned(id, user_id)
            .await?
            .map(UserAddressResponse::from)
            .ok_or_else(|| not_found(id))
    }

    pub async fn list(&self, email: &str, page: &PageRequest) -> AppResult<Page<UserAddressResponse>> {
        let user_id = self.owner_id(email).await?;
        let source = self.addresses.owned_page_source(user_id);

        Ok(paginate(&source, page).await?.map(UserAddressResponse::from))
    }

    /// 논리 삭제 후 삭제된 주소를 돌려줍니다.
    pub async fn delete(&self, email: &str, id: &str) -> AppResult<UserAddressResponse> {
        let user_id = self.owner_id(email).await?;

        let mut address = self
            .addresses
            .find_owned(id, user_id)
            .await?
            .ok_or_else(|| not_found(id))?;

        if !self.addresses.soft_delete_owned(id, user_id).await? {
            return Err(not_found(id));
        }

        address.status = Status::Deleted;
        address.updated_at = DateTime::now();
        log::info!("사용자 주소 삭제: user={}, address={}", user_id, id);

        Ok(UserAddressResponse::from(address))
    }
}

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("주소를 찾을 수 없습니다: {}", id))
}

/// 네 단계 참조를 모두 검증합니다. 각 참조는 존재하고 삭제되지 않아야 합니다.
async fn resolve_refs(
    hierarchy: &HierarchyValidator,
    request: &CreateUserAddressRequest,
) -> AppResult<AddressRefs> {
    let state = hierarchy.validate_state(&request.state_id).await?;
    let city = hierarchy.validate_city(&request.city_id).await?;
    let neighborhood = hierarchy.validate_neighborhood(&request.neighborhood_id).await?;
    let place = hierarchy.validate_place(&request.place_id).await?;

    Ok(AddressRefs {
        state_id: persisted_id(&state)?,
        city_id: persisted_id(&city)?,
        neighborhood_id: persisted_id(&neighborhood)?,
        place_id: persisted_id(&place)?,
    })
}

fn build_user_address(
    user_id: ObjectId,
    refs: AddressRefs,
    request: CreateUserAddressRequest,
) -> AppResult<UserAddress> {
    let street = validate_required_string(&request.street, "거리명")?;
    let number = validate_required_string(&request.number, "번지")?;

    Ok(UserAddress::new(
        user_id,
        refs,
        street,
        number,
        clean_optional_string(request.complement),
    ))
}
