//! 주소 서비스 백엔드
//!
//! 사용자 계정, 주(State) → 도시(City) → 동네(Neighborhood) → 장소(Place) 주소 계층,
//! 사용자 배송지를 JWT 세션 인증 뒤에서 제공하는 REST 서비스입니다.
//!
//! # Features
//!
//! - **사용자 관리**: 회원 가입, 현재 사용자 조회, 논리 삭제
//! - **JWT 인증**: HS256 액세스/리프레시 토큰, 로그아웃 시 토큰 폐기
//! - **주소 계층**: 부모 참조 검증, 필터/정렬이 있는 페이지 조회
//! - **MongoDB**: 모든 엔티티 영구 저장, 삭제는 상태 변경으로 처리
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + 인증 미들웨어
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직, 계층 검증, 페이지네이션
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use address_service_backend::state::AppState;
//!
//! let state = AppState::build(database, jwt_settings, bcrypt_cost, page_limits);
//! let pair = state.user_service.login(request).await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod state;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
