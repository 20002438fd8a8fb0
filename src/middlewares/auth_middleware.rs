//! # JWT 인증 미들웨어
//!
//! 보호된 스코프에 `wrap`으로 적용하며, 유효한 액세스 토큰이 없는 요청은
//! 핸들러에 도달하기 전에 401로 거절합니다.
//!
//! ```text
//! Authorization: Bearer <token>
//!        │
//!        ▼
//! ┌──────────────────────┐   실패   ┌───────────────────┐
//! │ 헤더 파싱 + 토큰 검증 │ ───────► │ 401 Unauthorized  │
//! └──────────────────────┘          └───────────────────┘
//!        │ 성공
//!        ▼
//! request.extensions ← AuthenticatedUser { email, access_token }
//!        │
//!        ▼
//!     핸들러
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::web;
//! use crate::middlewares::AuthMiddleware;
//!
//! web::scope("/user/address")
//!     .wrap(AuthMiddleware::required())
//!     .service(user_address::create_user_address);
//! ```
//!
//! 토큰 검증에는 앱 데이터로 등록된 `web::Data<TokenService>`를 사용합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 인증 필수 미들웨어 팩토리
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthMiddleware;

impl AuthMiddleware {
    pub fn required() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use actix_web::{get, http::StatusCode, test, web, App, HttpResponse};

    use crate::config::JwtSettings;
    use crate::domain::models::auth::AuthenticatedUser;
    use crate::services::auth::{RevocationCache, TokenService};

    #[get("/me")]
    async fn me(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.email)
    }

    fn token_service() -> web::Data<TokenService> {
        let settings = JwtSettings::new(
            "middleware-access-secret",
            "middleware-refresh-secret",
            chrono::Duration::minutes(15),
            chrono::Duration::minutes(60),
            Duration::from_secs(3600),
        )
        .unwrap();
        web::Data::new(TokenService::new(settings, Arc::new(RevocationCache::new())))
    }

    macro_rules! protected_app {
        ($tokens:expr) => {
            test::init_service(
                App::new()
                    .app_data($tokens.clone())
                    .service(web::scope("/p").wrap(AuthMiddleware::required()).service(me)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_valid_token_reaches_handler() {
        let tokens = token_service();
        let access = tokens.issue_access_token("ana@example.com").unwrap();
        let app = protected_app!(tokens);

        let req = test::TestRequest::get()
            .uri("/p/me")
            .insert_header(("Authorization", format!("Bearer {}", access)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert_eq!(body, "ana@example.com");
    }

    #[actix_web::test]
    async fn test_missing_or_malformed_header_is_unauthorized() {
        let tokens = token_service();
        let access = tokens.issue_access_token("ana@example.com").unwrap();
        let app = protected_app!(tokens);

        let headers = [
            None,
            Some(access.clone()),
            Some(format!("Basic {}", access)),
            Some(format!("Bearer {} extra", access)),
            Some("Bearer not-a-jwt".to_string()),
        ];

        for header in headers {
            let mut req = test::TestRequest::get().uri("/p/me");
            if let Some(value) = &header {
                req = req.insert_header(("Authorization", value.as_str()));
            }
            let resp = test::call_service(&app, req.to_request()).await;
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "header={:?}", header);
        }
    }

    #[actix_web::test]
    async fn test_refresh_and_revoked_tokens_are_rejected() {
        let tokens = token_service();
        let refresh = tokens.issue_refresh_token("ana@example.com").unwrap();
        let access = tokens.issue_access_token("ana@example.com").unwrap();
        tokens.invalidate(&access);
        let app = protected_app!(tokens);

        for token in [refresh, access] {
            let req = test::TestRequest::get()
                .uri("/p/me")
                .insert_header(("Authorization", format!("Bearer {}", token)))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[actix_web::test]
    async fn test_missing_token_service_is_server_error() {
        let app = test::init_service(
            App::new().service(web::scope("/p").wrap(AuthMiddleware::required()).service(me)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/p/me")
            .insert_header(("Authorization", "Bearer whatever"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
