//! # Authentication HTTP Handlers
//!
//! 로그인, 액세스 토큰 갱신, 로그아웃 엔드포인트입니다.
//!
//! ```text
//! POST /user/login    {email, password}  → {token, refresh_token}
//! POST /user/refresh  {refresh_token}    → {token, refresh_token}   (리프레시 토큰은 그대로)
//! POST /user/logout   {refresh_token}    → {message}                (Bearer 필요)
//! ```

use actix_web::{post, web, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::domain::dto::users::{LoginRequest, LogoutRequest, RefreshTokenRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::services::users::UserService;

/// 로그인 핸들러
///
/// # 요청 본문
///
/// ```json
/// { "email": "ana@example.com", "password": "secret1" }
/// ```
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiJ9...", "refresh_token": "eyJhbGciOiJIUzI1NiJ9..." }
/// ```
///
/// ## 실패 (401 Unauthorized)
///
/// 사용자가 없거나 비밀번호가 틀린 경우 같은 메시지로 응답합니다.
#[post("/login")]
pub async fn login(
    service: web::Data<UserService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let pair = service.login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(pair))
}

/// 액세스 토큰 갱신 핸들러
#[post("/refresh")]
pub async fn refresh_token(
    service: web::Data<UserService>,
    payload: web::Json<RefreshTokenRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;
    let pair = service.refresh(&payload.refresh_token)?;

    Ok(HttpResponse::Ok().json(pair))
}

/// 로그아웃 핸들러
///
/// 본문의 리프레시 토큰과 요청에 사용된 액세스 토큰을 모두 폐기합니다.
#[post("/logout")]
pub async fn logout(
    service: web::Data<UserService>,
    user: AuthenticatedUser,
    payload: web::Json<LogoutRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;
    service.logout(&payload.refresh_token, &user.access_token);
    log::info!("로그아웃: {}", user.email);

    Ok(HttpResponse::Ok().json(json!({
        "message": "로그아웃되었습니다"
    })))
}
