//! 인증 서비스 모듈
//!
//! - [`token_service`] - JWT 발급/검증/갱신/폐기
//! - [`revocation_cache`] - 폐기된 토큰 목록

pub mod token_service;
pub mod revocation_cache;

pub use token_service::*;
pub use revocation_cache::RevocationCache;
