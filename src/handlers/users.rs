//! # User Management HTTP Handlers
//!
//! 사용자 계정과 관련된 HTTP 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 인증 | 설명 | 상태 코드 |
//! |--------|------|------|------|-----------|
//! | `POST` | `/user` | - | 회원 가입 | 201 Created |
//! | `GET` | `/user` | Bearer | 현재 사용자 조회 | 200 OK |
//! | `DELETE` | `/user/{id}` | Bearer | 계정 논리 삭제 | 204 No Content |
//!
//! 로그인, 토큰 갱신, 로그아웃은 [`crate::handlers::auth`]에 있습니다.

use actix_web::{delete, get, post, web, HttpResponse};

use crate::domain::dto::users::CreateUserRequest;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::services::users::UserService;

/// 회원 가입 핸들러
///
/// # 엔드포인트
///
/// `POST /user`
///
/// # 요청 본문
///
/// ```json
/// {
///   "name": "Ana Souza",
///   "email": "ana@example.com",
///   "password": "secret1",
///   "confirm_password": "secret1"
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
/// ```json
/// {
///   "id": "507f1f77bcf86cd799439011",
///   "name": "Ana Souza",
///   "email": "ana@example.com",
///   "role": "customer",
///   "status": "active",
///   "created_at": "2024-01-01T00:00:00Z",
///   "updated_at": "2024-01-01T00:00:00Z"
/// }
/// ```
///
/// ## 실패 사례
///
/// - 400 Bad Request: 입력값 검증 실패, 비밀번호 확인 불일치
/// - 409 Conflict: 이미 사용 중인 이메일
#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 현재 사용자 조회 핸들러
///
/// 액세스 토큰의 이메일로 사용자를 찾습니다. 토큰 발급 후 계정이 삭제되었다면 404입니다.
#[get("")]
pub async fn get_current_user(
    service: web::Data<UserService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let response = service.get_current_user(&user.email).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 사용자 삭제 핸들러
///
/// 상태만 `deleted`로 바꾸는 논리 삭제입니다. 같은 이메일로 다시 가입할 수 있습니다.
///
/// # 엔드포인트
///
/// `DELETE /user/{user_id}`
///
/// # 응답
///
/// - 204 No Content: 삭제됨
/// - 400 Bad Request: 잘못된 ID 형식
/// - 404 Not Found: 없거나 이미 삭제된 사용자
#[delete("/{user_id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    user: AuthenticatedUser,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    log::info!("사용자 삭제 요청: target={}, by={}", user_id, user.email);
    service.delete_user(&user_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
