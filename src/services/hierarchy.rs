//! 주소 계층 참조 검증
//!
//! 자식 엔티티를 만들기 전에 바로 위 부모가 존재하고 삭제되지 않았는지
//! 확인합니다. 검증은 한 단계만 수행하며 상위 계층까지 거슬러 올라가지 않습니다.
//!
//! 검증과 저장은 원자적이지 않습니다. 검증 직후 다른 요청이 부모를 삭제하면
//! 자식은 삭제된 부모를 참조한 채 저장될 수 있으며, 이는 허용된 동작입니다.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::{AddressKind, AddressNode, City, Neighborhood, Place, State};
use crate::errors::AppError;

/// 삭제 여부와 관계없이 ID로 엔티티를 찾는 저장소 기능
///
/// 형식이 잘못된 ID는 존재하지 않는 것으로 취급해 `Ok(None)`을 반환합니다.
#[async_trait]
pub trait ParentLookup<P>: Send + Sync {
    async fn find_any_status(&self, id: &str) -> Result<Option<P>, AppError>;
}

#[derive(Debug, Error)]
pub enum HierarchyError {
    #[error("{label}을(를) 찾을 수 없습니다: {id}", label = .kind.label())]
    NotFound { kind: AddressKind, id: String },

    #[error("삭제된 {label}은(는) 참조할 수 없습니다: {id}", label = .kind.label())]
    ParentDeleted { kind: AddressKind, id: String },

    #[error(transparent)]
    Storage(#[from] AppError),
}

impl From<HierarchyError> for AppError {
    fn from(error: HierarchyError) -> Self {
        match error {
            HierarchyError::Storage(inner) => inner,
            other => AppError::ValidationError(other.to_string()),
        }
    }
}

/// 부모 참조 검증기
#[derive(Clone)]
pub struct HierarchyValidator {
    states: Arc<dyn ParentLookup<State>>,
    cities: Arc<dyn ParentLookup<City>>,
    neighborhoods: Arc<dyn ParentLookup<Neighborhood>>,
    places: Arc<dyn ParentLookup<Place>>,
}

impl HierarchyValidator {
    pub fn new(
        states: Arc<dyn ParentLookup<State>>,
        cities: Arc<dyn ParentLookup<City>>,
        neighborhoods: Arc<dyn ParentLookup<Neighborhood>>,
        places: Arc<dyn ParentLookup<Place>>,
    ) -> Self {
        Self {
            states,
            cities,
            neighborhoods,
            places,
        }
    }

    pub async fn validate_state(&self, id: &str) -> Result<State, HierarchyError> {
        validate_parent(self.states.as_ref(), id).await
    }

    pub async fn validate_city(&self, id: &str) -> Result<City, HierarchyError> {
        validate_parent(self.cities.as_ref(), id).await
    }

    pub async fn validate_neighborhood(&self, id: &str) -> Result<Neighborhood, HierarchyError> {
        validate_parent(self.neighborhoods.as_ref(), id).await
    }

    pub async fn validate_place(&self, id: &str) -> Result<Place, HierarchyError> {
        validate_parent(self.places.as_ref(), id).await
    }
}

/// 부모를 찾아 활성 상태일 때만 반환합니다.
///
/// # Errors
///
/// * `HierarchyError::NotFound` - 해당 ID의 엔티티가 없음
/// * `HierarchyError::ParentDeleted` - 엔티티가 삭제 상태
/// * `HierarchyError::Storage` - 저장소 조회 실패
pub async fn validate_parent<P>(lookup: &dyn ParentLookup<P>, id: &str) -> Result<P, HierarchyError>
where
    P: AddressNode,
{
    match lookup.find_any_status(id).await? {
        None => {
            log::debug!("부모 {} 없음: {}", P::KIND, id);
            Err(HierarchyError::NotFound {
                kind: P::KIND,
                id: id.to_string(),
            })
        }
        Some(parent) if parent.is_deleted() => {
            log::debug!("삭제된 부모 {} 참조: {}", P::KIND, id);
            Err(HierarchyError::ParentDeleted {
                kind: P::KIND,
                id: id.to_string(),
            })
        }
        Some(parent) => Ok(parent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Entity, PlaceType, Status};
    use dashmap::DashMap;
    use mongodb::bson::oid::ObjectId;

    /// 메모리 내 조회 저장소
    struct MemoryLookup<P> {
        rows: DashMap<String, P>,
    }

    impl<P: Entity + Clone> MemoryLookup<P> {
        fn new() -> Self {
            Self { rows: DashMap::new() }
        }

        fn insert(&self, mut row: P) -> String {
            let id = ObjectId::new();
            row.set_id(id);
            self.rows.insert(id.to_hex(), row);
            id.to_hex()
        }
    }

    #[async_trait]
    impl<P: Clone + Send + Sync> ParentLookup<P> for MemoryLookup<P> {
        async fn find_any_status(&self, id: &str) -> Result<Option<P>, AppError> {
            Ok(self.rows.get(id).map(|row| row.clone()))
        }
    }

    struct BrokenLookup;

    #[async_trait]
    impl ParentLookup<State> for BrokenLookup {
        async fn find_any_status(&self, _id: &str) -> Result<Option<State>, AppError> {
            Err(AppError::DatabaseError("connection reset".to_string()))
        }
    }

    struct Fixture {
        states: Arc<MemoryLookup<State>>,
        cities: Arc<MemoryLookup<City>>,
        neighborhoods: Arc<MemoryLookup<Neighborhood>>,
        validator: HierarchyValidator,
    }

    fn fixture() -> Fixture {
        let states = Arc::new(MemoryLookup::<State>::new());
        let cities = Arc::new(MemoryLookup::<City>::new());
        let neighborhoods = Arc::new(MemoryLookup::<Neighborhood>::new());
        let places = Arc::new(MemoryLookup::<Place>::new());

        let validator = HierarchyValidator::new(
            states.clone(),
            cities.clone(),
            neighborhoods.clone(),
            places,
        );

        Fixture {
            states,
            cities,
            neighborhoods,
            validator,
        }
    }

    fn soft_delete<P>(lookup: &MemoryLookup<P>, id: &str, mark: impl FnOnce(&mut P)) {
        if let Some(mut row) = lookup.rows.get_mut(id) {
            mark(row.value_mut());
        }
    }

    #[actix_web::test]
    async fn test_active_state_is_returned() {
        let f = fixture();
        let id = f.states.insert(State::new("São Paulo".to_string(), "SP".to_string()));

        let state = f.validator.validate_state(&id).await.unwrap();
        assert_eq!(state.uf, "SP");

        let city = City::new("Campinas".to_string(), state.id.unwrap());
        assert_eq!(city.state_id.to_hex(), id);
    }

    #[actix_web::test]
    async fn test_missing_state_is_not_found() {
        let f = fixture();
        let missing = ObjectId::new().to_hex();

        let result = f.validator.validate_state(&missing).await;
        assert!(matches!(
            result,
            Err(HierarchyError::NotFound { kind: AddressKind::State, .. })
        ));
    }

    #[actix_web::test]
    async fn test_deleted_state_is_rejected() {
        let f = fixture();
        let id = f.states.insert(State::new("Bahia".to_string(), "BA".to_string()));
        soft_delete(&*f.states, &id, |s| s.status = Status::Deleted);

        let result = f.validator.validate_state(&id).await;
        assert!(matches!(
            result,
            Err(HierarchyError::ParentDeleted { kind: AddressKind::State, .. })
        ));
    }

    #[actix_web::test]
    async fn test_only_immediate_parent_is_checked() {
        let f = fixture();
        let state_id = f.states.insert(State::new("Paraná".to_string(), "PR".to_string()));
        let city_id = f.cities.insert(City::new(
            "Curitiba".to_string(),
            ObjectId::parse_str(&state_id).unwrap(),
        ));
        let neighborhood_id = f.neighborhoods.insert(Neighborhood::new(
            "Batel".to_string(),
            ObjectId::parse_str(&city_id).unwrap(),
        ));

        soft_delete(&*f.states, &state_id, |s| s.status = Status::Deleted);
        soft_delete(&*f.cities, &city_id, |c| c.status = Status::Deleted);

        let neighborhood = f.validator.validate_neighborhood(&neighborhood_id).await.unwrap();
        let place = Place::new(
            "Praça".to_string(),
            "80420-000".to_string(),
            -25.44,
            -49.29,
            neighborhood.id.unwrap(),
            PlaceType::default(),
        );
        assert_eq!(place.neighborhood_id.to_hex(), neighborhood_id);
    }

    #[actix_web::test]
    async fn test_parent_deleted_after_validation_is_not_detected() {
        // 검증과 저장 사이의 삭제는 감지하지 않는다
        let f = fixture();
        let state_id = f.states.insert(State::new("Goiás".to_string(), "GO".to_string()));

        let state = f.validator.validate_state(&state_id).await.unwrap();
        soft_delete(&*f.states, &state_id, |s| s.status = Status::Deleted);

        let city = City::new("Goiânia".to_string(), state.id.unwrap());
        assert_eq!(city.state_id.to_hex(), state_id);
        assert!(f.validator.validate_state(&state_id).await.is_err());
    }

    #[actix_web::test]
    async fn test_storage_error_passes_through() {
        let result = validate_parent::<State>(&BrokenLookup, "abc").await;
        assert!(matches!(result, Err(HierarchyError::Storage(AppError::DatabaseError(_)))));

        let app_error: AppError = result.unwrap_err().into();
        assert!(matches!(app_error, AppError::DatabaseError(_)));
    }

    #[test]
    fn test_reference_errors_map_to_validation() {
        let not_found: AppError = HierarchyError::NotFound {
            kind: AddressKind::City,
            id: "x".to_string(),
        }
        .into();
        let deleted: AppError = HierarchyError::ParentDeleted {
            kind: AddressKind::City,
            id: "x".to_string(),
        }
        .into();

        assert!(matches!(&not_found, AppError::ValidationError(m) if m.contains("찾을 수 없습니다")));
        assert!(matches!(&deleted, AppError::ValidationError(m) if m.contains("삭제된")));
    }
}
