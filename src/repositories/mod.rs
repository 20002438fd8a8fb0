//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 모든 리포지토리는 [`mongo_store::MongoStore`] 위에서 동작하며,
//! 컬렉션별 필터와 인덱스만 정의합니다. 인스턴스는 시작 시점에
//! [`crate::state::AppState`]가 한 번 생성합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{UserRepository, UserStore};
//!
//! let user_repo = UserRepository::new(&database);
//! user_repo.create_indexes().await?;
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

pub mod mongo_store;
pub mod users;
pub mod address;
pub mod user_address;
