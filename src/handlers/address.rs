//! # Address Hierarchy HTTP Handlers
//!
//! | 메서드 | 경로 | 인증 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/address/state` | - | 201 |
//! | `POST` | `/address/city` | - | 201 |
//! | `POST` | `/address/neighborhood` | - | 201 |
//! | `POST` | `/address/place` | - | 201 |
//! | `GET` | `/address/{kind}/paginated` | - | 200 |
//! | `GET` | `/address/{kind}/{id}` | - | 200 |
//! | `DELETE` | `/address/{kind}/{id}` | Bearer | 204 |
//!
//! `{kind}`는 `state`, `city`, `neighborhood`, `place` 중 하나이며 그 외 값은 404입니다.
//! `/paginated`가 `/{id}`보다 먼저 등록되어야 합니다.

use actix_web::{delete, get, post, web, HttpResponse};

use crate::domain::dto::address::{
    AddressFilterQuery, CreateCityRequest, CreateNeighborhoodRequest, CreatePlaceRequest,
    CreateStateRequest,
};
use crate::domain::entities::AddressKind;
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::pagination::PageRequest;
use crate::errors::AppError;
use crate::services::address::AddressService;

/// 주 생성
///
/// ```json
/// { "name": "São Paulo", "uf": "sp" }
/// ```
///
/// UF는 대문자로 저장되며, 같은 UF의 주가 이미 있으면 409입니다.
#[post("/state")]
pub async fn create_state(
    service: web::Data<AddressService>,
    payload: web::Json<CreateStateRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.create_state(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

/// 도시 생성
///
/// ```json
/// { "name": "Campinas", "state_id": "507f1f77bcf86cd799439011" }
/// ```
///
/// 주가 없거나 삭제된 경우 400, 같은 이름의 도시가 있으면 409입니다.
#[post("/city")]
pub async fn create_city(
    service: web::Data<AddressService>,
    payload: web::Json<CreateCityRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.create_city(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

#[post("/neighborhood")]
pub async fn create_neighborhood(
    service: web::Data<AddressService>,
    payload: web::Json<CreateNeighborhoodRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.create_neighborhood(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

/// 장소 생성
///
/// ```json
/// {
///   "name": "Praça da Sé",
///   "postal_code": "01001-000",
///   "latitude": -23.5503,
///   "longitude": -46.6339,
///   "neighborhood_id": "507f1f77bcf86cd799439013",
///   "type": "COMPLETE"
/// }
/// ```
///
/// `type`을 생략하면 `INCOMPLETE`입니다.
#[post("/place")]
pub async fn create_place(
    service: web::Data<AddressService>,
    payload: web::Json<CreatePlaceRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.create_place(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

/// 페이지 조회
///
/// # 쿼리 파라미터
///
/// - `page` (기본 0), `size` (기본 15), `sort=필드[,asc|desc]` (반복 가능)
/// - 필터: `uf`, `name`, `state_id`, `city_id`, `neighborhood_id`, `postal_code`
///   (종류에 맞지 않는 필터는 무시)
///
/// ```bash
/// curl 'http://localhost:8080/address/city/paginated?state_id=...&sort=name,desc&size=20'
/// ```
#[get("/{kind}/paginated")]
pub async fn get_address_page(
    service: web::Data<AddressService>,
    kind: web::Path<AddressKind>,
    filter: web::Query<AddressFilterQuery>,
    page: PageRequest,
) -> Result<HttpResponse, AppError> {
    let result = service.list(kind.into_inner(), &filter, &page).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[get("/{kind}/{id}")]
pub async fn get_address(
    service: web::Data<AddressService>,
    path: web::Path<(AddressKind, String)>,
) -> Result<HttpResponse, AppError> {
    let (kind, id) = path.into_inner();
    let response = service.get(kind, &id).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// 논리 삭제
///
/// 자식 엔티티에는 전파되지 않습니다.
#[delete("/{kind}/{id}")]
pub async fn delete_address(
    service: web::Data<AddressService>,
    user: AuthenticatedUser,
    path: web::Path<(AddressKind, String)>,
) -> Result<HttpResponse, AppError> {
    let (kind, id) = path.into_inner();
    log::info!("{} 삭제 요청: {} (by {})", kind, id, user.email);
    service.delete(kind, &id).await?;

    Ok(HttpResponse::NoContent().finish())
}
