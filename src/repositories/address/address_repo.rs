//! # 주소 계층 리포지토리
//!
//! `states`, `cities`, `neighborhoods`, `places` 네 컬렉션을 담당합니다.
//! 목록 필터 문서는 이 모듈의 `*_filter` 함수가 만들며, 모두 삭제된 문서를 제외합니다.

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::{
    bson::{doc, Document},
    options::IndexOptions,
    IndexModel,
};

use crate::{
    db::Database,
    domain::{
        dto::address::AddressFilterQuery,
        entities::{AddressKind, AddressRecord, City, Neighborhood, Place, State},
        models::pagination::{Page, PageRequest},
    },
    errors::AppResult,
    repositories::mongo_store::{active, parse_object_id, MongoStore, StoredEntity},
    services::pagination::paginate,
    utils::string_utils::{contains_pattern, normalize_uf},
};

/// 이름 부분 일치 조건 (대소문자 무시)
fn name_contains(name: &str) -> Document {
    doc! { "$regex": contains_pattern(name), "$options": "i" }
}

/// 이름 완전 일치 조건 (대소문자 무시)
fn name_equals(name: &str) -> Document {
    doc! { "$regex": format!("^{}$", contains_pattern(name)), "$options": "i" }
}

fn with_name(mut filter: Document, query: &AddressFilterQuery) -> Document {
    if let Some(name) = &query.name {
        filter.insert("name", name_contains(name));
    }
    filter
}

/// `uf` (대문자로 정규화 후 일치), `name`
pub fn state_filter(query: &AddressFilterQuery) -> AppResult<Document> {
    let mut filter = Document::new();
    if let Some(uf) = &query.uf {
        filter.insert("uf", normalize_uf(uf));
    }
    Ok(active(with_name(filter, query)))
}

/// `state_id`, `name`
///
/// # Errors
///
/// * `AppError::ValidationError` - `state_id` 형식이 잘못된 경우
pub fn city_filter(query: &AddressFilterQuery) -> AppResult<Document> {
    let mut filter = Document::new();
    if let Some(state_id) = &query.state_id {
        filter.insert("state_id", parse_object_id(state_id)?);
    }
    Ok(active(with_name(filter, query)))
}

/// `city_id`, `name`
pub fn neighborhood_filter(query: &AddressFilterQuery) -> AppResult<Document> {
    let mut filter = Document::new();
    if let Some(city_id) = &query.city_id {
        filter.insert("city_id", parse_object_id(city_id)?);
    }
    Ok(active(with_name(filter, query)))
}

/// `neighborhood_id`, `name`, `postal_code`
pub fn place_filter(query: &AddressFilterQuery) -> AppResult<Document> {
    let mut filter = Document::new();
    if let Some(neighborhood_id) = &query.neighborhood_id {
        filter.insert("neighborhood_id", parse_object_id(neighborhood_id)?);
    }
    if let Some(postal_code) = &query.postal_code {
        filter.insert("postal_code", postal_code.as_str());
    }
    Ok(active(with_name(filter, query)))
}

fn index(keys: Document, name: &str) -> IndexModel {
    IndexModel::builder()
        .keys(keys)
        .options(IndexOptions::builder().name(name.to_string()).build())
        .build()
}

async fn create_on<T: StoredEntity>(store: &MongoStore<T>, indexes: Vec<IndexModel>) -> AppResult<()> {
    store.collection().create_indexes(indexes).await?;
    Ok(())
}

/// 주소 계층 저장소 기능
///
/// 서비스 계층은 이 트레이트에만 의존합니다. 조회와 삭제는 모두 삭제되지 않은 엔티티만 대상으로 합니다.
#[async_trait]
pub trait AddressStore: Send + Sync {
    /// 정규화된 UF로 삭제되지 않은 주를 찾습니다.
    async fn find_state_by_uf(&self, uf: &str) -> AppResult<Option<State>>;

    /// 이름이 같은(대소문자 무시) 삭제되지 않은 도시를 찾습니다.
    async fn find_city_by_name(&self, name: &str) -> AppResult<Option<City>>;

    /// 새 주를 저장하고 ID가 채워진 엔티티를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 유니크 인덱스 위반
    async fn insert_state(&self, state: State) -> AppResult<State>;

    async fn insert_city(&self, city: City) -> AppResult<City>;

    async fn insert_neighborhood(&self, neighborhood: Neighborhood) -> AppResult<Neighborhood>;

    async fn insert_place(&self, place: Place) -> AppResult<Place>;

    async fn find_active(&self, kind: AddressKind, id: &str) -> AppResult<Option<AddressRecord>>;

    /// 논리 삭제. 대상이 없거나 이미 삭제되었으면 `false`입니다.
    async fn soft_delete(&self, kind: AddressKind, id: &str) -> AppResult<bool>;

    /// # Errors
    ///
    /// * `AppError::ValidationError` - 부모 ID 필터 형식이 잘못된 경우
    async fn page(
        &self,
        kind: AddressKind,
        query: &AddressFilterQuery,
        request: &PageRequest,
    ) -> AppResult<Page<AddressRecord>>;
}

/// 주소 계층 데이터 액세스 리포지토리
///
/// 각 컬렉션 저장소는 `Arc`로 공유되어 부모 검증기([`crate::services::hierarchy::HierarchyValidator`])의
/// 조회 기능으로도 사용됩니다.
pub struct AddressRepository {
    pub states: Arc<MongoStore<State>>,
    pub cities: Arc<MongoStore<City>>,
    pub neighborhoods: Arc<MongoStore<Neighborhood>>,
    pub places: Arc<MongoStore<Place>>,
}

impl AddressRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            states: Arc::new(MongoStore::new(database)),
            cities: Arc::new(MongoStore::new(database)),
            neighborhoods: Arc::new(MongoStore::new(database)),
            places: Arc::new(MongoStore::new(database)),
        }
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let uf_unique = IndexModel::builder()
            .keys(doc! { "uf": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .partial_filter_expression(doc! { "status": "active" })
                    .name("uf_unique_active".to_string())
                    .build(),
            )
            .build();

        create_on(&self.states, vec![uf_unique, index(doc! { "name": 1 }, "name")]).await?;
        create_on(
            &self.cities,
            vec![index(doc! { "name": 1 }, "name"), index(doc! { "state_id": 1 }, "state_id")],
        )
        .await?;
        create_on(
            &self.neighborhoods,
            vec![index(doc! { "name": 1 }, "name"), index(doc! { "city_id": 1 }, "city_id")],
        )
        .await?;
        create_on(
            &self.places,
            vec![
                index(doc! { "name": 1 }, "name"),
                index(doc! { "neighborhood_id": 1 }, "neighborhood_id"),
                index(doc! { "postal_code": 1 }, "postal_code"),
            ],
        )
        .await?;

        Ok(())
    }
}

#[async_trait]
impl AddressStore for AddressRepository {
    async fn find_state_by_uf(&self, uf: &str) -> AppResult<Option<State>> {
        self.states.find_one(active(doc! { "uf": uf })).await
    }

    async fn find_city_by_name(&self, name: &str) -> AppResult<Option<City>> {
        self.cities.find_one(active(doc! { "name": name_equals(name) })).await
    }

    async fn insert_state(&self, state: State) -> AppResult<State> {
        self.states.insert(state).await
    }

    async fn insert_city(&self, city: City) -> AppResult<City> {
        self.cities.insert(city).await
    }

    async fn insert_neighborhood(&self, neighborhood: Neighborhood) -> AppResult<Neighborhood> {
        self.neighborhoods.insert(neighborhood).await
    }

    async fn insert_place(&self, place: Place) -> AppResult<Place> {
        self.places.insert(place).await
    }

    async fn find_active(&self, kind: AddressKind, id: &str) -> AppResult<Option<AddressRecord>> {
        Ok(match kind {
            AddressKind::State => self.states.find_active(id).await?.map(Into::into),
            AddressKind::City => self.cities.find_active(id).await?.map(Into::into),
            AddressKind::Neighborhood => self.neighborhoods.find_active(id).await?.map(Into::into),
            AddressKind::Place => self.places.find_active(id).await?.map(Into::into),
        })
    }

    async fn soft_delete(&self, kind: AddressKind, id: &str) -> AppResult<bool> {
        match kind {
            AddressKind::State => self.states.soft_delete_by_id(id).await,
            AddressKind::City => self.cities.soft_delete_by_id(id).await,
            AddressKind::Neighborhood => self.neighborhoods.soft_delete_by_id(id).await,
            AddressKind::Place => self.places.soft_delete_by_id(id).await,
        }
    }

    async fn page(
        &self,
        kind: AddressKind,
        query: &AddressFilterQuery,
        request: &PageRequest,
    ) -> AppResult<Page<AddressRecord>> {
        Ok(match kind {
            AddressKind::State => {
                let source = self.states.page_source(state_filter(query)?);
                paginate(&source, request).await?.map(AddressRecord::from)
            }
            AddressKind::City => {
                let source = self.cities.page_source(city_filter(query)?);
                paginate(&source, request).await?.map(AddressRecord::from)
            }
            AddressKind::Neighborhood => {
                let source = self.neighborhoods.page_source(neighborhood_filter(query)?);
                paginate(&source, request).await?.map(AddressRecord::from)
            }
            AddressKind::Place => {
                let source = self.places.page_source(place_filter(query)?);
                paginate(&source, request).await?.map(AddressRecord::from)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_state_filter_normalizes_uf_and_escapes_name() {
        let query = AddressFilterQuery {
            uf: Some("sp".into()),
            name: Some("São (SP)".into()),
            ..Default::default()
        };
        let filter = state_filter(&query).unwrap();

        assert_eq!(filter.get_str("uf").unwrap(), "SP");
        let name = filter.get_document("name").unwrap();
        assert_eq!(name.get_str("$regex").unwrap(), r"São \(SP\)");
        assert_eq!(name.get_str("$options").unwrap(), "i");
        assert!(filter.contains_key("status"));
    }

    #[test]
    fn test_empty_query_only_excludes_deleted() {
        let filter = neighborhood_filter(&AddressFilterQuery::default()).unwrap();
        assert_eq!(filter, doc! { "status": { "$ne": "deleted" } });
    }

    #[test]
    fn test_parent_filter_parses_object_id() {
        let state_id = ObjectId::new();
        let query = AddressFilterQuery {
            state_id: Some(state_id.to_hex()),
            city_id: Some("ignored for cities".into()),
            ..Default::default()
        };
        let filter = city_filter(&query).unwrap();

        assert_eq!(filter.get_object_id("state_id").unwrap(), state_id);
        assert!(!filter.contains_key("city_id"));
    }

    #[test]
    fn test_invalid_parent_filter_is_rejected() {
        let query = AddressFilterQuery {
            neighborhood_id: Some("nope".into()),
            ..Default::default()
        };
        assert!(matches!(place_filter(&query), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_place_filter_postal_code_is_exact() {
        let query = AddressFilterQuery {
            postal_code: Some("01001-000".into()),
            ..Default::default()
        };
        let filter = place_filter(&query).unwrap();
        assert_eq!(filter.get_str("postal_code").unwrap(), "01001-000");
    }

    #[test]
    fn test_name_equals_is_anchored() {
        let condition = name_equals("Rio");
        assert_eq!(condition.get_str("$regex").unwrap(), "^Rio$");
    }
}
