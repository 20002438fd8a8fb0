//! JWT 토큰 관리 서비스 구현
//!
//! 액세스 토큰과 리프레시 토큰의 발급, 검증, 갱신, 폐기를 담당합니다.
//! 두 토큰은 서로 다른 비밀키와 수명을 사용하며 HMAC-SHA256으로 서명됩니다.
//!
//! ## 검증 순서
//!
//! 1. 폐기 목록에 있으면 `Revoked`
//! 2. 서명이 맞지 않거나 형식이 잘못되면 `SignatureInvalid`
//! 3. 만료 시각이 지났으면 `Expired`
//!
//! 클라이언트에는 세 경우 모두 같은 "유효하지 않은 인증 정보" 응답이 나가고,
//! 구체적인 사유는 로그에만 남습니다.

use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::config::JwtSettings;
use crate::domain::models::token::{TokenClaims, TokenPair};
use crate::errors::AppError;
use crate::services::auth::RevocationCache;

/// 토큰 수명주기 에러
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Authorization 헤더가 없거나 `Bearer <token>` 형식이 아님
    #[error("인증 헤더가 없거나 형식이 올바르지 않습니다")]
    Unauthenticated,

    #[error("토큰 서명이 유효하지 않습니다")]
    SignatureInvalid,

    #[error("토큰이 만료되었습니다")]
    Expired,

    #[error("폐기된 토큰입니다")]
    Revoked,

    /// 서명 자체가 실패한 경우. 요청 문제가 아닌 내부 오류입니다.
    #[error("토큰 서명 실패: {0}")]
    Signing(String),
}

impl From<TokenError> for AppError {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::Signing(msg) => AppError::InternalError(msg),
            _ => AppError::AuthenticationError("유효하지 않은 인증 정보입니다".to_string()),
        }
    }
}

/// 토큰 용도
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

/// JWT 토큰 관리 서비스
///
/// 요청 간 공유되는 상태는 폐기 목록뿐이며, 나머지는 입력과 현재 시각,
/// 기동 시 주입된 설정에만 의존합니다.
pub struct TokenService {
    settings: JwtSettings,
    revoked: Arc<RevocationCache>,
}

impl TokenService {
    pub fn new(settings: JwtSettings, revoked: Arc<RevocationCache>) -> Self {
        Self { settings, revoked }
    }

    /// 액세스 토큰 발급
    ///
    /// # Errors
    ///
    /// * `TokenError::Signing` - 서명 실패
    pub fn issue_access_token(&self, email: &str) -> Result<String, TokenError> {
        self.issue(email, TokenKind::Access)
    }

    /// 리프레시 토큰 발급. 액세스 토큰과 다른 비밀키, 더 긴 수명을 사용합니다.
    pub fn issue_refresh_token(&self, email: &str) -> Result<String, TokenError> {
        self.issue(email, TokenKind::Refresh)
    }

    /// 로그인 응답용 토큰 쌍 발급
    pub fn issue_token_pair(&self, email: &str) -> Result<TokenPair, TokenError> {
        Ok(TokenPair {
            token: self.issue_access_token(email)?,
            refresh_token: self.issue_refresh_token(email)?,
        })
    }

    /// 액세스 토큰 검증 및 클레임 추출
    ///
    /// # Errors
    ///
    /// * `TokenError::Revoked` - 폐기 목록에 있음
    /// * `TokenError::SignatureInvalid` - 서명 불일치 또는 형식 오류
    /// * `TokenError::Expired` - 만료됨
    pub fn validate_access_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        self.validate(token, TokenKind::Access)
    }

    /// 리프레시 토큰 검증. 실패 사유는 액세스 토큰과 같습니다.
    pub fn validate_refresh_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        self.validate(token, TokenKind::Refresh)
    }

    /// 리프레시 토큰으로 새 액세스 토큰 발급
    ///
    /// 리프레시 토큰은 교체하지 않고 그대로 돌려줍니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let pair = token_service.refresh_access_token(&refresh_token)?;
    /// assert_eq!(pair.refresh_token, refresh_token);
    /// ```
    pub fn refresh_access_token(&self, refresh_token: &str) -> Result<TokenPair, TokenError> {
        let claims = self.validate_refresh_token(refresh_token)?;
        let token = self.issue_access_token(&claims.email)?;

        Ok(TokenPair {
            token,
            refresh_token: refresh_token.to_string(),
        })
    }

    /// 토큰 폐기
    ///
    /// 토큰 자체의 만료와 무관하게 고정된 보존 시간 동안 폐기 목록에 둡니다.
    pub fn invalidate(&self, token: &str) {
        self.revoked.put(token, self.settings.revocation_ttl);
    }

    /// `Authorization` 헤더에서 토큰 부분 추출
    ///
    /// 공백으로 나눈 결과가 정확히 두 부분이고 첫 부분이 `Bearer`여야 합니다.
    pub fn extract_bearer_token(auth_header: &str) -> Result<&str, TokenError> {
        let mut parts = auth_header.split(' ');
        match (parts.next(), parts.next(), parts.next()) {
            (Some("Bearer"), Some(token), None) if !token.is_empty() => Ok(token),
            _ => Err(TokenError::Unauthenticated),
        }
    }

    fn issue(&self, email: &str, kind: TokenKind) -> Result<String, TokenError> {
        let now = Utc::now();
        let lifetime = match kind {
            TokenKind::Access => self.settings.access_ttl,
            TokenKind::Refresh => self.settings.refresh_ttl,
        };

        let claims = TokenClaims {
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + lifetime).timestamp(),
            jti: uuid::Uuid::new_v4().to_string(),
        };

        let encoding_key = EncodingKey::from_secret(self.secret(kind).as_bytes());

        encode(&Header::new(Algorithm::HS256), &claims, &encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    fn validate(&self, token: &str, kind: TokenKind) -> Result<TokenClaims, TokenError> {
        if self.revoked.contains(token) {
            return Err(TokenError::Revoked);
        }

        let decoding_key = DecodingKey::from_secret(self.secret(kind).as_bytes());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::SignatureInvalid,
            })
    }

    fn secret(&self, kind: TokenKind) -> &str {
        match kind {
            TokenKind::Access => &self.settings.access_secret,
            TokenKind::Refresh => &self.settings.refresh_secret,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn service_with_revocation_ttl(revocation_ttl: Duration) -> TokenService {
        let settings = JwtSettings::new(
            "test-access-secret",
            "test-refresh-secret",
            chrono::Duration::minutes(15),
            chrono::Duration::minutes(60),
            revocation_ttl,
        )
        .unwrap();
        TokenService::new(settings, Arc::new(RevocationCache::new()))
    }

    fn service() -> TokenService {
        service_with_revocation_ttl(Duration::from_secs(3600))
    }

    fn expired_token(secret: &str, email: &str) -> String {
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            email: email.to_string(),
            iat: now - 600,
            exp: now - 120,
            jti: "expired".to_string(),
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_fresh_access_token_validates() {
        let service = service();
        let token = service.issue_access_token("ana@example.com").unwrap();

        let claims = service.validate_access_token(&token).unwrap();
        assert_eq!(claims.email, "ana@example.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_refresh_token_outlives_access_token() {
        let service = service();
        let access = service.validate_access_token(&service.issue_access_token("a@b.c").unwrap()).unwrap();
        let refresh = service
            .validate_refresh_token(&service.issue_refresh_token("a@b.c").unwrap())
            .unwrap();

        assert!(refresh.exp > access.exp);
    }

    #[test]
    fn test_tokens_are_unique_per_issue() {
        let service = service();
        let first = service.issue_access_token("a@b.c").unwrap();
        let second = service.issue_access_token("a@b.c").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_wrong_secret_is_rejected_both_ways() {
        let service = service();
        let access = service.issue_access_token("a@b.c").unwrap();
        let refresh = service.issue_refresh_token("a@b.c").unwrap();

        assert_eq!(service.validate_access_token(&refresh), Err(TokenError::SignatureInvalid));
        assert_eq!(service.validate_refresh_token(&access), Err(TokenError::SignatureInvalid));
    }

    #[test]
    fn test_garbage_token_is_signature_invalid() {
        let service = service();
        assert_eq!(service.validate_access_token("not.a.jwt"), Err(TokenError::SignatureInvalid));
        assert_eq!(service.validate_access_token(""), Err(TokenError::SignatureInvalid));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = service();
        let token = expired_token("test-access-secret", "a@b.c");

        assert_eq!(service.validate_access_token(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_expired_token_with_wrong_secret_is_signature_invalid() {
        let service = service();
        let token = expired_token("someone-else", "a@b.c");

        assert_eq!(service.validate_access_token(&token), Err(TokenError::SignatureInvalid));
    }

    #[test]
    fn test_invalidated_token_is_revoked() {
        let service = service();
        let access = service.issue_access_token("a@b.c").unwrap();
        let refresh = service.issue_refresh_token("a@b.c").unwrap();

        service.invalidate(&access);
        service.invalidate(&refresh);

        assert_eq!(service.validate_access_token(&access), Err(TokenError::Revoked));
        assert_eq!(service.validate_refresh_token(&refresh), Err(TokenError::Revoked));
    }

    #[test]
    fn test_revocation_lapses_after_ttl() {
        let service = service_with_revocation_ttl(Duration::from_millis(20));
        let access = service.issue_access_token("a@b.c").unwrap();

        service.invalidate(&access);
        assert_eq!(service.validate_access_token(&access), Err(TokenError::Revoked));

        std::thread::sleep(Duration::from_millis(40));
        assert!(service.validate_access_token(&access).is_ok());
    }

    #[test]
    fn test_revoked_wins_over_expired() {
        let service = service();
        let token = expired_token("test-access-secret", "a@b.c");
        service.invalidate(&token);

        assert_eq!(service.validate_access_token(&token), Err(TokenError::Revoked));
    }

    #[test]
    fn test_refresh_returns_same_refresh_token_and_subject() {
        let service = service();
        let refresh = service.issue_refresh_token("ana@example.com").unwrap();

        let pair = service.refresh_access_token(&refresh).unwrap();

        assert_eq!(pair.refresh_token, refresh);
        let claims = service.validate_access_token(&pair.token).unwrap();
        assert_eq!(claims.email, "ana@example.com");
    }

    #[test]
    fn test_refresh_propagates_validation_error() {
        let service = service();
        let refresh = service.issue_refresh_token("a@b.c").unwrap();
        service.invalidate(&refresh);

        assert_eq!(service.refresh_access_token(&refresh).err(), Some(TokenError::Revoked));

        let access = service.issue_access_token("a@b.c").unwrap();
        assert_eq!(
            service.refresh_access_token(&access).err(),
            Some(TokenError::SignatureInvalid)
        );
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(TokenService::extract_bearer_token("Bearer abc.def"), Ok("abc.def"));
        assert_eq!(TokenService::extract_bearer_token("bearer abc"), Err(TokenError::Unauthenticated));
        assert_eq!(TokenService::extract_bearer_token("Bearer"), Err(TokenError::Unauthenticated));
        assert_eq!(TokenService::extract_bearer_token("Bearer "), Err(TokenError::Unauthenticated));
        assert_eq!(TokenService::extract_bearer_token("Bearer a b"), Err(TokenError::Unauthenticated));
        assert_eq!(TokenService::extract_bearer_token("Basic xyz"), Err(TokenError::Unauthenticated));
    }

    #[test]
    fn test_token_errors_are_indistinguishable_to_clients() {
        let messages: Vec<String> = [
            TokenError::Unauthenticated,
            TokenError::SignatureInvalid,
            TokenError::Expired,
            TokenError::Revoked,
        ]
        .into_iter()
        .map(|e| AppError::from(e).to_string())
        .collect();

        assert!(messages.windows(2).all(|w| w[0] == w[1]));
        assert!(matches!(
            AppError::from(TokenError::Signing("boom".into())),
            AppError::InternalError(_)
        ));
    }
}
