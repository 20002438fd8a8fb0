//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스 인스턴스는 시작 시점에 [`crate::state::AppState`]가 한 번 생성하고
//! `web::Data`로 핸들러에 주입합니다.
//!
//! # Modules
//!
//! - [`users`] - 회원 가입, 로그인, 토큰 갱신, 로그아웃, 계정 삭제
//! - [`auth`] - JWT 발급/검증과 토큰 폐기 목록
//! - [`address`] - 주소 계층(주, 도시, 동네, 장소) 관리
//! - [`user_address`] - 사용자별 배송지 관리
//! - [`hierarchy`] - 부모 참조 검증
//! - [`pagination`] - 정렬 해석과 페이지 조립
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{users::UserService, auth::TokenService};
//!
//! let pair = user_service.login(request).await?;
//! let claims = token_service.validate_access_token(&pair.token)?;
//! ```

pub mod users;
pub mod auth;
pub mod address;
pub mod user_address;
pub mod hierarchy;
pub mod pagination;
