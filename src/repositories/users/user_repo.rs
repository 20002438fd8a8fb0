//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층입니다. `users` 컬렉션을 사용하며,
//! 이메일 유일성은 삭제되지 않은 사용자 사이에서만 보장됩니다.

use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, IndexModel};

use crate::{
    db::Database,
    domain::entities::User,
    errors::AppResult,
    repositories::mongo_store::{active, MongoStore},
};

/// 사용자 저장소 기능
///
/// 서비스 계층은 이 트레이트에만 의존하므로 저장소 없이도 동작을 검증할 수 있습니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 정규화된 이메일로 삭제되지 않은 사용자를 찾습니다.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// # Errors
    ///
    /// * `AppError::ConflictError` - 같은 이메일의 활성 사용자가 이미 있음
    async fn create(&self, user: User) -> AppResult<User>;

    /// 논리 삭제. 대상이 없거나 이미 삭제되었으면 `false`입니다.
    async fn soft_delete(&self, id: &str) -> AppResult<bool>;
}

/// 사용자 데이터 액세스 리포지토리
///
/// ## 인덱스
///
/// - `email_unique_active`: `status == "active"`인 문서에만 적용되는 유니크 인덱스.
///   삭제된 계정의 이메일로 다시 가입할 수 있습니다.
/// - `created_at_desc`
pub struct UserRepository {
    store: MongoStore<User>,
}

impl UserRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            store: MongoStore::new(database),
        }
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .partial_filter_expression(doc! { "status": "active" })
                    .name("email_unique_active".to_string())
                    .build(),
            )
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder().name("created_at_desc".to_string()).build())
            .build();

        self.store
            .collection()
            .create_indexes([email_index, created_at_index])
            .await?;

        Ok(())
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.store.find_one(active(doc! { "email": email })).await
    }

    async fn create(&self, user: User) -> AppResult<User> {
        self.store.insert(user).await
    }

    async fn soft_delete(&self, id: &str) -> AppResult<bool> {
        self.store.soft_delete_by_id(id).await
    }
}
