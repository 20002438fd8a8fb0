//! # User Address HTTP Handlers
//!
//! 인증된 사용자 본인의 배송지 엔드포인트입니다. 스코프 전체가 [`crate::middlewares::AuthMiddleware`]로 보호됩니다.
//!
//! | 메서드 | 경로 | 상태 코드 |
//! |--------|------|-----------|
//! | `POST` | `/user/address` | 201 |
//! | `GET` | `/user/address/paginated` | 200 |
//! | `GET` | `/user/address/{id}` | 200 |
//! | `DELETE` | `/user/address/{id}` | 200 (삭제된 주소) |

use actix_web::{delete, get, post, web, HttpResponse};

use crate::domain::dto::user_address::CreateUserAddressRequest;
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::pagination::PageRequest;
use crate::errors::AppError;
use crate::services::user_address::UserAddressService;

/// 배송지 등록
///
/// # 요청 본문
///
/// ```json
/// {
///   "state_id": "...",
///   "city_id": "...",
///   "neighborhood_id": "...",
///   "place_id": "...",
///   "street": "Rua Maria Monteiro",
///   "number": "812",
///   "complement": "apto 31"
/// }
/// ```
///
/// 네 ID 중 하나라도 없거나 삭제된 엔티티를 가리키면 400입니다.
#[post("")]
pub async fn create_user_address(
    service: web::Data<UserAddressService>,
    user: AuthenticatedUser,
    payload: web::Json<CreateUserAddressRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.create(&user.email, payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

#[get("/paginated")]
pub async fn get_user_address_page(
    service: web::Data<UserAddressService>,
    user: AuthenticatedUser,
    page: PageRequest,
) -> Result<HttpResponse, AppError> {
    let result = service.list(&user.email, &page).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// 다른 사용자의 주소는 404입니다.
#[get("/{id}")]
pub async fn get_user_address(
    service: web::Data<UserAddressService>,
    user: AuthenticatedUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let response = service.get(&user.email, &id).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[delete("/{id}")]
pub async fn delete_user_address(
    service: web::Data<UserAddressService>,
    user: AuthenticatedUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let response = service.delete(&user.email, &id).await?;
    Ok(HttpResponse::Ok().json(response))
}
