//! # Domain Models
//!
//! 영속 엔티티가 아닌 도메인 값 객체들입니다.
//!
//! - [`auth`] - 인증 미들웨어가 요청에 붙이는 인증 주체
//! - [`token`] - JWT 클레임과 토큰 쌍
//! - [`pagination`] - 페이지 요청/응답과 정렬 키

pub mod auth;
pub mod token;
pub mod pagination;
