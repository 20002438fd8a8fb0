//! 사용자 관리 서비스 모듈
//!
//! 회원 가입, 로그인/로그아웃, 토큰 갱신, 현재 사용자 조회와 계정 삭제를 담당합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱
//! - 활성 사용자 기준 이메일 중복 방지
//! - 로그인 실패 사유를 응답에 드러내지 않음
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(user_repo, token_service, PasswordConfig::bcrypt_cost());
//! let response = user_service.create_user(request).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
