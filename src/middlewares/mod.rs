//! HTTP 미들웨어 모듈
//!
//! - [`auth_middleware`] - Bearer 액세스 토큰 검증 후 요청에 인증 주체를 붙입니다.

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
