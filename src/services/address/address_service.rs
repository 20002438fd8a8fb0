//! # 주소 계층 서비스
//!
//! 주 → 도시 → 동네 → 장소 네 단계의 생성, 단건 조회, 페이지 조회, 논리 삭제를
//! 담당합니다.
//!
//! ```text
//! create_city(req)
//!   ├── 입력 검증 (validator)
//!   ├── 부모 주 검증 (HierarchyValidator)
//!   ├── 이름 중복 확인 (대소문자 무시)
//!   └── 저장
//! ```
//!
//! 삭제는 해당 엔티티만 상태를 바꾸며 자식에게 전파되지 않습니다.

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::{
    domain::{
        dto::address::{
            AddressFilterQuery, AddressResponse, CityResponse, CreateCityRequest,
            CreateNeighborhoodRequest, CreatePlaceRequest, CreateStateRequest,
            NeighborhoodResponse, PlaceResponse, StateResponse,
        },
        entities::{AddressKind, City, Entity, Neighborhood, Place, State},
        models::pagination::{Page, PageRequest},
    },
    errors::{AppError, AppResult},
    repositories::address::AddressStore,
    services::hierarchy::HierarchyValidator,
    utils::string_utils::{normalize_uf, validate_required_string},
};

pub struct AddressService {
    store: Arc<dyn AddressStore>,
    hierarchy: Arc<HierarchyValidator>,
}

impl AddressService {
    pub fn new(store: Arc<dyn AddressStore>, hierarchy: Arc<HierarchyValidator>) -> Self {
        Self { store, hierarchy }
    }

    /// 주 생성
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 입력값 검증 실패
    /// * `AppError::ConflictError` - 같은 UF의 주가 이미 있음
    pub async fn create_state(&self, request: CreateStateRequest) -> AppResult<StateResponse> {
        request.validate()?;
        let state = build_state(&request)?;

        if self.store.find_state_by_uf(&state.uf).await?.is_some() {
            return Err(AppError::ConflictError(format!(
                "이미 등록된 UF입니다: {}",
                state.uf
            )));
        }

        let created = self.store.insert_state(state).await?;
        log::info!("주 생성: {} ({})", created.uf, created.id_string());

        Ok(StateResponse::from(created))
    }

    /// 도시 생성
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 입력값 검증 실패, 주가 없거나 삭제됨
    /// * `AppError::ConflictError` - 같은 이름의 도시가 이미 있음
    pub async fn create_city(&self, request: CreateCityRequest) -> AppResult<CityResponse> {
        request.validate()?;
        let name = validate_required_string(&request.name, "이름")?;

        let state = self.hierarchy.validate_state(&request.state_id).await?;

        if self.store.find_city_by_name(&name).await?.is_some() {
            return Err(AppError::ConflictError(format!(
                "이미 등록된 도시입니다: {}",
                name
            )));
        }

        let created = self
            .store
            .insert_city(City::new(name, persisted_id(&state)?))
            .await?;
        log::info!("도시 생성: {} ({})", created.name, created.id_string());

        Ok(CityResponse::from(created))
    }

    pub async fn create_neighborhood(
        &self,
        request: CreateNeighborhoodRequest,
    ) -> AppResult<NeighborhoodResponse> {
        request.validate()?;
        let name = validate_required_string(&request.name, "이름")?;

        let city = self.hierarchy.validate_city(&request.city_id).await?;

        let created = self
            .store
            .insert_neighborhood(Neighborhood::new(name, persisted_id(&city)?))
            .await?;
        log::info!("동네 생성: {} ({})", created.name, created.id_string());

        Ok(NeighborhoodResponse::from(created))
    }

    pub async fn create_place(&self, request: CreatePlaceRequest) -> AppResult<PlaceResponse> {
        request.validate()?;

        let neighborhood = self
            .hierarchy
            .validate_neighborhood(&request.neighborhood_id)
            .await?;

        let place = build_place(&request, persisted_id(&neighborhood)?)?;
        let created = self.store.insert_place(place).await?;
        log::info!("장소 생성: {} ({})", created.name, created.id_string());

        Ok(PlaceResponse::from(created))
    }

    /// 삭제되지 않은 엔티티 단건 조회
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 잘못된 ID 형식
    /// * `AppError::NotFound` - 없거나 삭제된 엔티티
    pub async fn get(&self, kind: AddressKind, id: &str) -> AppResult<AddressResponse> {
        self.store
            .find_active(kind, id)
            .await?
            .map(AddressResponse::from)
            .ok_or_else(|| not_found(kind, id))
    }

    /// 필터와 정렬이 적용된 페이지 조회
    pub async fn list(
        &self,
        kind: AddressKind,
        query: &AddressFilterQuery,
        page: &PageRequest,
    ) -> AppResult<Page<AddressResponse>> {
        let result = self.store.page(kind, query, page).await?.map(AddressResponse::from);

        log::debug!(
            "{} 페이지 조회: page={}, size={}, total={}",
            kind,
            page.page,
            page.size,
            result.total_elements
        );

        Ok(result)
    }

    /// 논리 삭제. 이미 삭제된 엔티티는 `NotFound`입니다.
    pub async fn delete(&self, kind: AddressKind, id: &str) -> AppResult<()> {
        if !self.store.soft_delete(kind, id).await? {
            return Err(not_found(kind, id));
        }

        log::info!("{} 삭제: {}", kind, id);
        Ok(())
    }
}

fn not_found(kind: AddressKind, id: &str) -> AppError {
    AppError::NotFound(format!("{}을(를) 찾을 수 없습니다: {}", kind.label(), id))
}

/// 저장된 엔티티의 ID. 저장소에서 읽은 엔티티는 항상 ID를 가집니다.
pub(crate) fn persisted_id<T: Entity>(entity: &T) -> AppResult<ObjectId> {
    entity
        .id()
        .ok_or_else(|| AppError::InternalError("저장된 엔티티에 ID가 없습니다".to_string()))
}

fn build_state(request: &CreateStateRequest) -> AppResult<State> {
    let name = validate_required_string(&request.name, "이름")?;
    Ok(State::new(name, normalize_uf(&request.uf)))
}

fn build_place(request: &CreatePlaceRequest, neighborhood_id: ObjectId) -> AppResult<Place> {
    let name = validate_required_string(&request.name, "이름")?;
    let postal_code = validate_required_string(&request.postal_code, "우편번호")?;

    Ok(Place::new(
        name,
        postal_code,
        request.latitude,
        request.longitude,
        neighborhood_id,
        request.place_type,
    ))
}
