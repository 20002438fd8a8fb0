//! 공통 MongoDB 저장소
//!
//! 모든 컬렉션이 공유하는 조회/저장/논리 삭제/페이지 조회 연산입니다.
//! 엔티티별 리포지토리는 이 타입을 감싸고 필터와 인덱스만 정의합니다.

use std::marker::PhantomData;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime, Document},
    error::{ErrorKind, WriteFailure},
    Collection,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    db::Database,
    domain::entities::{AddressNode, Entity},
    errors::{AppError, AppResult},
    services::{
        hierarchy::ParentLookup,
        pagination::{PageSource, ResolvedSort},
    },
};

/// 중복 키 오류 코드
const DUPLICATE_KEY: i32 = 11000;

/// 컬렉션에 저장 가능한 엔티티
pub trait StoredEntity: Entity + Serialize + DeserializeOwned + Unpin + Send + Sync + 'static {}

impl<T> StoredEntity for T where T: Entity + Serialize + DeserializeOwned + Unpin + Send + Sync + 'static {}

/// 16진수 문자열을 `ObjectId`로 변환합니다.
///
/// # Errors
///
/// * `AppError::ValidationError` - 형식이 올바르지 않은 경우
pub fn parse_object_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id.trim())
        .map_err(|_| AppError::ValidationError(format!("유효하지 않은 ID 형식입니다: '{}'", id)))
}

/// 삭제되지 않은 문서 조건
pub fn not_deleted() -> Document {
    doc! { "status": { "$ne": "deleted" } }
}

/// 주어진 필터에 삭제 제외 조건을 더합니다.
pub fn active(mut filter: Document) -> Document {
    filter.extend(not_deleted());
    filter
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY
    )
}

/// 엔티티 하나의 컬렉션
pub struct MongoStore<T: StoredEntity> {
    collection: Collection<T>,
}

impl<T: StoredEntity> Clone for MongoStore<T> {
    fn clone(&self) -> Self {
        Self {
            collection: self.collection.clone(),
        }
    }
}

impl<T: StoredEntity> MongoStore<T> {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<T>(T::COLLECTION),
        }
    }

    pub fn collection(&self) -> &Collection<T> {
        &self.collection
    }

    pub async fn find_one(&self, filter: Document) -> AppResult<Option<T>> {
        Ok(self.collection.find_one(filter).await?)
    }

    /// 삭제되지 않은 엔티티를 ID로 조회합니다.
    pub async fn find_active(&self, id: &str) -> AppResult<Option<T>> {
        let object_id = parse_object_id(id)?;
        self.find_one(active(doc! { "_id": object_id })).await
    }

    /// 새 엔티티를 저장하고 할당된 ID를 채워 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 유니크 인덱스 위반
    /// * `AppError::DatabaseError` - 그 외 저장 실패
    pub async fn insert(&self, mut entity: T) -> AppResult<T> {
        let result = self.collection.insert_one(&entity).await.map_err(|e| {
            if is_duplicate_key(&e) {
                AppError::ConflictError("이미 존재하는 데이터입니다".to_string())
            } else {
                AppError::from(e)
            }
        })?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError(format!("{}: ObjectId가 아닌 ID가 할당되었습니다", T::COLLECTION))
        })?;
        entity.set_id(id);

        Ok(entity)
    }

    /// 조건에 맞는 활성 문서 하나를 삭제 상태로 바꿉니다.
    ///
    /// 변경된 문서가 없으면 `false`입니다. 이미 삭제된 문서는 대상이 아닙니다.
    pub async fn soft_delete(&self, filter: Document) -> AppResult<bool> {
        let result = self
            .collection
            .update_one(
                active(filter),
                doc! { "$set": { "status": "deleted", "updated_at": DateTime::now() } },
            )
            .await?;

        Ok(result.modified_count > 0)
    }

    pub async fn soft_delete_by_id(&self, id: &str) -> AppResult<bool> {
        let object_id = parse_object_id(id)?;
        self.soft_delete(doc! { "_id": object_id }).await
    }

    /// 필터가 적용된 페이지 조회 대상을 만듭니다.
    pub fn page_source(&self, filter: Document) -> MongoPageSource<T> {
        MongoPageSource {
            collection: self.collection.clone(),
            filter,
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<P> ParentLookup<P> for MongoStore<P>
where
    P: StoredEntity + AddressNode,
{
    async fn find_any_status(&self, id: &str) -> AppResult<Option<P>> {
        let Ok(object_id) = ObjectId::parse_str(id.trim()) else {
            return Ok(None);
        };
        self.find_one(doc! { "_id": object_id }).await
    }
}

/// 필터가 고정된 컬렉션 조회
pub struct MongoPageSource<T: StoredEntity> {
    collection: Collection<T>,
    filter: Document,
    _marker: PhantomData<T>,
}

/// 정렬 문서를 만듭니다. `_id`가 없으면 마지막 기준으로 붙여 순서를 고정합니다.
pub fn sort_document(sort: &[ResolvedSort]) -> Document {
    let mut document = Document::new();
    for key in sort {
        document.insert(key.field, key.direction.as_mongo());
    }
    if !document.contains_key("_id") {
        document.insert("_id", 1);
    }
    document
}

#[async_trait]
impl<T: StoredEntity> PageSource<T> for MongoPageSource<T> {
    async fn count(&self) -> AppResult<u64> {
        Ok(self.collection.count_documents(self.filter.clone()).await?)
    }

    async fn fetch(&self, sort: &[ResolvedSort], offset: u64, limit: u64) -> AppResult<Vec<T>> {
        let limit = i64::try_from(limit)
            .map_err(|_| AppError::ValidationError("size가 너무 큽니다".to_string()))?;

        let cursor = self
            .collection
            .find(self.filter.clone())
            .sort(sort_document(sort))
            .skip(offset)
            .limit(limit)
            .await?;

        let items: Vec<T> = cursor.try_collect().await?;
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::pagination::Direction;

    #[test]
    fn test_parse_object_id() {
        let id = ObjectId::new();
        assert_eq!(parse_object_id(&id.to_hex()).unwrap(), id);
        assert!(matches!(parse_object_id("42"), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_active_keeps_caller_conditions() {
        let filter = active(doc! { "uf": "SP" });
        assert_eq!(filter.get_str("uf").unwrap(), "SP");
        assert_eq!(
            filter.get_document("status").unwrap(),
            &doc! { "$ne": "deleted" }
        );
    }

    #[test]
    fn test_sort_document_preserves_order_and_adds_tiebreak() {
        let sort = [
            ResolvedSort { field: "name", direction: Direction::Desc },
            ResolvedSort { field: "created_at", direction: Direction::Asc },
        ];
        let document = sort_document(&sort);
        let keys: Vec<&str> = document.keys().map(String::as_str).collect();

        assert_eq!(keys, vec!["name", "created_at", "_id"]);
        assert_eq!(document.get_i32("name").unwrap(), -1);
    }

    #[test]
    fn test_sort_document_respects_explicit_id() {
        let sort = [ResolvedSort { field: "_id", direction: Direction::Desc }];
        let document = sort_document(&sort);

        assert_eq!(document.len(), 1);
        assert_eq!(document.get_i32("_id").unwrap(), -1);
    }
}
