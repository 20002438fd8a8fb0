//! JWT 세션 클레임과 로그인 응답 토큰 쌍
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// - `email`: 토큰의 주체 (정규화된 사용자 이메일)
/// - `iat`: 발급 시간 (Unix timestamp)
/// - `exp`: 만료 시간 (Unix timestamp)
/// - `jti`: 토큰 고유 ID. 같은 초에 발급된 토큰도 서로 다른 문자열이 되어
///   폐기 목록이 정확히 한 토큰만 가리킵니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub email: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

/// 로그인/갱신 응답으로 전달되는 토큰 쌍
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// 액세스 토큰 (API 접근용 단기 토큰)
    pub token: String,
    /// 리프레시 토큰 (토큰 갱신용 장기 토큰)
    pub refresh_token: String,
}
