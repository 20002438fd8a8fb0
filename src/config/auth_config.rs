//! # Authentication Configuration Module
//!
//! JWT 토큰, 토큰 폐기 목록, CORS 관련 설정을 관리하는 모듈입니다.
//!
//! ## 필수 환경 변수 설정 (프로덕션)
//!
//! ```bash
//! export JWT_SECRET="access-token-secret"
//! export JWT_REFRESH_SECRET="refresh-token-secret"
//! ```
//!
//! ## 선택적 환경 변수
//!
//! ```bash
//! export JWT_EXPIRES_IN="15"                 # 액세스 토큰 수명 (분)
//! export JWT_REFRESH_EXPIRES_IN="1440"       # 리프레시 토큰 수명 (분)
//! export JWT_REVOCATION_TTL_MINUTES="720"    # 폐기 목록 보존 시간 (분)
//! export JWT_REVOCATION_SWEEP_MINUTES="10"   # 만료 항목 정리 주기 (분)
//! export ALLOWED_ORIGINS="https://a.com;https://b.com"
//! ```
//!
//! 환경 변수는 기동 시 [`JwtSettings::from_env`]로 한 번만 읽고,
//! 이후 컴포넌트는 소유한 설정 값만 사용합니다.

use std::env;
use std::fmt;
use std::time::Duration;

use crate::config::Environment;
use crate::errors::AppError;

const DEV_ACCESS_SECRET: &str = "dev-access-secret-change-me";
const DEV_REFRESH_SECRET: &str = "dev-refresh-secret-change-me";

/// 폐기 목록 보존 시간 상한 (365일)
pub const MAX_REVOCATION_TTL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// JWT 관련 환경 변수 접근자
pub struct JwtConfig;

impl JwtConfig {
    /// 액세스 토큰 서명 비밀키 (`JWT_SECRET`)
    pub fn secret() -> Option<String> {
        env::var("JWT_SECRET").ok().filter(|s| !s.trim().is_empty())
    }

    /// 리프레시 토큰 서명 비밀키 (`JWT_REFRESH_SECRET`)
    pub fn refresh_secret() -> Option<String> {
        env::var("JWT_REFRESH_SECRET").ok().filter(|s| !s.trim().is_empty())
    }

    /// 액세스 토큰 수명 (분). 기본값: 15
    pub fn expires_in_minutes() -> i64 {
        Self::minutes("JWT_EXPIRES_IN", 15)
    }

    /// 리프레시 토큰 수명 (분). 기본값: 1440 (24시간)
    pub fn refresh_expires_in_minutes() -> i64 {
        Self::minutes("JWT_REFRESH_EXPIRES_IN", 1440)
    }

    /// 폐기된 토큰을 기억하는 시간 (분). 기본값: 720 (12시간)
    pub fn revocation_ttl_minutes() -> i64 {
        Self::minutes("JWT_REVOCATION_TTL_MINUTES", 720)
    }

    /// 만료된 폐기 항목 정리 주기 (분). 기본값: 10
    pub fn revocation_sweep_minutes() -> i64 {
        Self::minutes("JWT_REVOCATION_SWEEP_MINUTES", 10)
    }

    fn minutes(key: &str, default: i64) -> i64 {
        match env::var(key) {
            Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!("{} 파싱 실패: '{}'. 기본값 {} 사용", key, raw, default);
                default
            }),
            Err(_) => default,
        }
    }
}

/// 기동 시점에 확정된 토큰 설정
///
/// `TokenService`가 소유하며, 요청 처리 중에는 환경 변수를 다시 읽지 않습니다.
#[derive(Clone)]
pub struct JwtSettings {
    pub access_secret: String,
    pub refresh_secret: String,
    pub access_ttl: chrono::Duration,
    pub refresh_ttl: chrono::Duration,
    pub revocation_ttl: Duration,
}

impl JwtSettings {
    /// 설정 값을 검증하며 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 빈 비밀키, 동일한 두 비밀키,
    ///   양수가 아닌 수명, 액세스 수명 ≥ 리프레시 수명, 상한을 넘는 폐기 목록 보존 시간
    pub fn new(
        access_secret: impl Into<String>,
        refresh_secret: impl Into<String>,
        access_ttl: chrono::Duration,
        refresh_ttl: chrono::Duration,
        revocation_ttl: Duration,
    ) -> Result<Self, AppError> {
        let access_secret = access_secret.into();
        let refresh_secret = refresh_secret.into();

        if access_secret.is_empty() || refresh_secret.is_empty() {
            return Err(AppError::InternalError("JWT 비밀키가 비어 있습니다".to_string()));
        }
        if access_secret == refresh_secret {
            return Err(AppError::InternalError(
                "액세스/리프레시 토큰은 서로 다른 비밀키를 사용해야 합니다".to_string(),
            ));
        }
        if access_ttl <= chrono::Duration::zero() {
            return Err(AppError::InternalError("액세스 토큰 수명은 0보다 커야 합니다".to_string()));
        }
        if access_ttl >= refresh_ttl {
            return Err(AppError::InternalError(format!(
                "액세스 토큰 수명({}분)은 리프레시 토큰 수명({}분)보다 짧아야 합니다",
                access_ttl.num_minutes(),
                refresh_ttl.num_minutes()
            )));
        }
        if revocation_ttl.is_zero() {
            return Err(AppError::InternalError("폐기 목록 보존 시간은 0보다 커야 합니다".to_string()));
        }
        if revocation_ttl > MAX_REVOCATION_TTL {
            return Err(AppError::InternalError(format!(
                "폐기 목록 보존 시간은 {}분 이하여야 합니다",
                MAX_REVOCATION_TTL.as_secs() / 60
            )));
        }

        Ok(Self {
            access_secret,
            refresh_secret,
            access_ttl,
            refresh_ttl,
            revocation_ttl,
        })
    }

    /// 환경 변수에서 설정을 읽어옵니다.
    ///
    /// 프로덕션에서는 두 비밀키가 모두 필요합니다. 그 외 환경에서는
    /// 개발용 기본 비밀키로 대체하고 경고를 남깁니다.
    pub fn from_env() -> Result<Self, AppError> {
        let environment = Environment::current();

        let access_secret = Self::resolve_secret(
            JwtConfig::secret(),
            "JWT_SECRET",
            DEV_ACCESS_SECRET,
            &environment,
        )?;
        let refresh_secret = Self::resolve_secret(
            JwtConfig::refresh_secret(),
            "JWT_REFRESH_SECRET",
            DEV_REFRESH_SECRET,
            &environment,
        )?;

        Self::new(
            access_secret,
            refresh_secret,
            Self::token_ttl(JwtConfig::expires_in_minutes(), "JWT_EXPIRES_IN")?,
            Self::token_ttl(JwtConfig::refresh_expires_in_minutes(), "JWT_REFRESH_EXPIRES_IN")?,
            Self::revocation_ttl_from_minutes(JwtConfig::revocation_ttl_minutes())?,
        )
    }

    fn token_ttl(minutes: i64, key: &str) -> Result<chrono::Duration, AppError> {
        chrono::Duration::try_minutes(minutes).ok_or_else(|| {
            AppError::InternalError(format!("{} 값이 너무 큽니다: {}", key, minutes))
        })
    }

    /// 음수는 0으로 취급하며, 이 경우 `new`에서 거부됩니다.
    fn revocation_ttl_from_minutes(minutes: i64) -> Result<Duration, AppError> {
        u64::try_from(minutes.max(0))
            .ok()
            .and_then(|m| m.checked_mul(60))
            .map(Duration::from_secs)
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "JWT_REVOCATION_TTL_MINUTES 값이 너무 큽니다: {}",
                    minutes
                ))
            })
    }

    fn resolve_secret(
        value: Option<String>,
        key: &str,
        fallback: &str,
        environment: &Environment,
    ) -> Result<String, AppError> {
        match value {
            Some(secret) => Ok(secret),
            None if environment.is_production() => Err(AppError::InternalError(format!(
                "{} 환경 변수가 설정되지 않았습니다",
                key
            ))),
            None => {
                log::warn!("{} not set, using default (not secure for production!)", key);
                Ok(fallback.to_string())
            }
        }
    }
}

impl fmt::Debug for JwtSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtSettings")
            .field("access_secret", &"***")
            .field("refresh_secret", &"***")
            .field("access_ttl_minutes", &self.access_ttl.num_minutes())
            .field("refresh_ttl_minutes", &self.refresh_ttl.num_minutes())
            .field("revocation_ttl", &self.revocation_ttl)
            .finish()
    }
}

/// CORS 설정
pub struct CorsConfig;

impl CorsConfig {
    /// Preflight 요청 캐시 시간 (초)
    pub const MAX_AGE_SECONDS: usize = 300;

    /// 허용 Origin 목록 (`ALLOWED_ORIGINS`, `;` 구분)
    ///
    /// 설정되지 않았거나 비어 있으면 `["*"]`입니다.
    pub fn allowed_origins() -> Vec<String> {
        Self::parse_origins(&env::var("ALLOWED_ORIGINS").unwrap_or_default())
    }

    fn parse_origins(raw: &str) -> Vec<String> {
        let origins: Vec<String> = raw
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        if origins.is_empty() {
            vec!["*".to_string()]
        } else {
            origins
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(access_minutes: i64, refresh_minutes: i64) -> Result<JwtSettings, AppError> {
        JwtSettings::new(
            "access",
            "refresh",
            chrono::Duration::minutes(access_minutes),
            chrono::Duration::minutes(refresh_minutes),
            std::time::Duration::from_secs(60),
        )
    }

    #[test]
    fn test_settings_accept_short_access_long_refresh() {
        let s = settings(15, 1440).unwrap();
        assert!(s.access_ttl < s.refresh_ttl);
    }

    #[test]
    fn test_settings_reject_access_not_shorter_than_refresh() {
        assert!(settings(60, 60).is_err());
        assert!(settings(120, 60).is_err());
        assert!(settings(0, 60).is_err());
    }

    #[test]
    fn test_settings_reject_shared_secret() {
        let result = JwtSettings::new(
            "same",
            "same",
            chrono::Duration::minutes(1),
            chrono::Duration::minutes(2),
            std::time::Duration::from_secs(60),
        );
        assert!(matches!(result, Err(AppError::InternalError(_))));
    }

    #[test]
    fn test_huge_lifetimes_are_rejected() {
        assert!(matches!(
            JwtSettings::revocation_ttl_from_minutes(i64::MAX),
            Err(AppError::InternalError(_))
        ));

        // 약 19년
        let huge = JwtSettings::revocation_ttl_from_minutes(10_000_000).unwrap();
        let result = JwtSettings::new(
            "access",
            "refresh",
            chrono::Duration::minutes(1),
            chrono::Duration::minutes(2),
            huge,
        );
        assert!(matches!(result, Err(AppError::InternalError(_))));

        assert_eq!(
            JwtSettings::revocation_ttl_from_minutes(720).unwrap(),
            Duration::from_secs(720 * 60)
        );
        assert_eq!(JwtSettings::revocation_ttl_from_minutes(-5).unwrap(), Duration::ZERO);
        assert!(JwtSettings::token_ttl(i64::MAX, "JWT_EXPIRES_IN").is_err());
        assert_eq!(
            JwtSettings::token_ttl(15, "JWT_EXPIRES_IN").unwrap(),
            chrono::Duration::minutes(15)
        );
    }

    #[test]
    fn test_revocation_ttl_cap_is_inclusive() {
        let at_cap = JwtSettings::new(
            "access",
            "refresh",
            chrono::Duration::minutes(1),
            chrono::Duration::minutes(2),
            MAX_REVOCATION_TTL,
        );
        assert!(at_cap.is_ok());

        let over = JwtSettings::new(
            "access",
            "refresh",
            chrono::Duration::minutes(1),
            chrono::Duration::minutes(2),
            MAX_REVOCATION_TTL + Duration::from_secs(1),
        );
        assert!(matches!(over, Err(AppError::InternalError(_))));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let s = JwtSettings::new(
            "s3cr3t-a",
            "s3cr3t-r",
            chrono::Duration::minutes(1),
            chrono::Duration::minutes(2),
            std::time::Duration::from_secs(60),
        )
        .unwrap();
        let rendered = format!("{:?}", s);
        assert!(!rendered.contains("s3cr3t"));
        assert!(rendered.contains("***"));
    }

    #[test]
    fn test_resolve_secret_requires_value_in_production() {
        let missing = JwtSettings::resolve_secret(None, "JWT_SECRET", "dev", &Environment::Production);
        assert!(missing.is_err());

        let dev = JwtSettings::resolve_secret(None, "JWT_SECRET", "dev", &Environment::Development);
        assert_eq!(dev.unwrap(), "dev");
    }

    #[test]
    fn test_parse_origins() {
        assert_eq!(CorsConfig::parse_origins(""), vec!["*"]);
        assert_eq!(
            CorsConfig::parse_origins("http://a.com; http://b.com;"),
            vec!["http://a.com", "http://b.com"]
        );
    }
}
