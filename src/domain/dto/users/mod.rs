//! 사용자 관련 DTO
//!
//! - [`request`] - 회원 가입, 로그인, 토큰 갱신, 로그아웃 요청
//! - [`response`] - 사용자 정보 응답

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
