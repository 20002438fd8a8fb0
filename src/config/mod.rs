//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 중앙에서 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 데이터베이스, 페이지네이션, 요청 제한 설정
//! - [`auth_config`] - JWT 토큰, 토큰 폐기 목록, CORS 설정
//!
//! ## 설계 원칙
//!
//! - 민감한 정보는 환경 변수로만 제공
//! - 기본값은 개발 환경에서만 안전
//! - 프로덕션에서 필수 설정값이 누락되면 기동 실패
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, ServerConfig, JwtSettings};
//!
//! let env = Environment::current();
//! let bind = (ServerConfig::host(), ServerConfig::port());
//! let jwt = JwtSettings::from_env()?;
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
