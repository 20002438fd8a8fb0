//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들입니다. 핸들러는 요청 본문과 경로를
//! 추출해 서비스에 넘기고, 결과를 상태 코드와 함께 JSON으로 돌려줍니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/Models - 도메인 모델                  ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 서비스는 `web::Data<...>`로 주입되며 ([`crate::state::AppState::configure`]),
//! 보호된 엔드포인트는 [`crate::domain::models::auth::AuthenticatedUser`] 추출자로
//! 인증 주체를 받습니다.
//!
//! ## 모듈 구성
//!
//! - **`users`**: 회원 가입, 현재 사용자 조회, 계정 삭제
//! - **`auth`**: 로그인, 토큰 갱신, 로그아웃
//! - **`address`**: 주소 계층 생성/조회/삭제
//! - **`user_address`**: 사용자 배송지
//!
//! ## 에러 처리
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! `AppError`의 `ResponseError` 구현이 상태 코드와 에러 본문을 만듭니다.

pub mod users;
pub mod auth;
pub mod address;
pub mod user_address;
