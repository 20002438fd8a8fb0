//! # 사용자 주소 리포지토리
//!
//! `user_addresses` 컬렉션을 담당합니다. 모든 조회와 삭제는 소유자 ID로 제한됩니다.

use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::IndexOptions,
    IndexModel,
};

use crate::{
    db::Database,
    domain::entities::UserAddress,
    errors::AppResult,
    repositories::mongo_store::{active, parse_object_id, MongoPageSource, MongoStore},
};

/// 소유자의 삭제되지 않은 주소 조건
pub fn owner_filter(user_id: ObjectId) -> Document {
    active(doc! { "user_id": user_id })
}

pub struct UserAddressRepository {
    store: MongoStore<UserAddress>,
}

impl UserAddressRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            store: MongoStore::new(database),
        }
    }

    pub async fn create(&self, address: UserAddress) -> AppResult<UserAddress> {
        self.store.insert(address).await
    }

    /// 소유자의 주소 하나를 찾습니다. 다른 사용자의 주소는 없는 것으로 취급됩니다.
    pub async fn find_owned(&self, id: &str, user_id: ObjectId) -> AppResult<Option<UserAddress>> {
        let object_id = parse_object_id(id)?;

        let mut filter = owner_filter(user_id);
        filter.insert("_id", object_id);
        self.store.find_one(filter).await
    }

    pub async fn soft_delete_owned(&self, id: &str, user_id: ObjectId) -> AppResult<bool> {
        let object_id = parse_object_id(id)?;
        self.store
            .soft_delete(doc! { "_id": object_id, "user_id": user_id })
            .await
    }

    pub fn owned_page_source(&self, user_id: ObjectId) -> MongoPageSource<UserAddress> {
        self.store.page_source(owner_filter(user_id))
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "created_at": -1 })
            .options(IndexOptions::builder().name("user_id_created_at".to_string()).build())
            .build();

        self.store.collection().create_indexes([user_index]).await?;
        Ok(())
    }
}
