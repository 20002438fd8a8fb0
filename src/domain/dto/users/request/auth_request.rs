//! 인증 요청관련 DTO
//!
//! 로그인, 토큰 갱신, 로그아웃 요청 본문을 매핑합니다.
use serde::Deserialize;
use validator::Validate;

/// 로그인 요청 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 6, max = 100, message = "비밀번호는 6-100자 사이여야 합니다"))]
    pub password: String,
}

/// 리프레시 토큰 요청 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "리프레시 토큰이 필요합니다"))]
    pub refresh_token: String,
}

/// 로그아웃 요청 구조체
///
/// 액세스 토큰은 `Authorization` 헤더에서 가져옵니다.
#[derive(Debug, Deserialize, Validate)]
pub struct LogoutRequest {
    #[validate(length(min = 1, message = "리프레시 토큰이 필요합니다"))]
    pub refresh_token: String,
}
