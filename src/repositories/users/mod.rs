//! 사용자 데이터 액세스 계층
//!
//! [`UserRepository`](user_repo::UserRepository)가 MongoDB `users` 컬렉션을 담당하고,
//! 서비스는 [`UserStore`](user_repo::UserStore) 트레이트를 통해 사용합니다.

pub mod user_repo;

pub use user_repo::{UserRepository, UserStore};
