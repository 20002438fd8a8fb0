//! # Route Configuration
//!
//! 모든 HTTP 라우트를 한 곳에서 등록합니다.
//!
//! ```text
//! /                          GET     공개
//! /health                    GET     공개 (DB ping)
//! /user/address/...          *       Bearer (스코프 전체)
//! /user                      POST    공개 (회원 가입)
//! /user/login, /refresh      POST    공개
//! /user, /user/{id}, /logout GET/DELETE/POST  Bearer
//! /address/{kind}            POST    공개
//! /address/{kind}/...        GET     공개
//! /address/{kind}/{id}       DELETE  Bearer
//! ```
//!
//! 스코프는 접두사로 매칭되므로 등록 순서가 중요합니다.
//! `/user/address`는 `/user`보다 먼저, 공개 라우트는 같은 스코프 안의 보호 하위 스코프보다 먼저 등록합니다.

use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::db::Database;
use crate::handlers;
use crate::middlewares::AuthMiddleware;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(hello).service(health_check);

    configure_user_address_routes(cfg);
    configure_user_routes(cfg);
    configure_address_routes(cfg);
}

fn configure_user_address_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/user/address")
            .wrap(AuthMiddleware::required())
            .service(handlers::user_address::create_user_address)
            .service(handlers::user_address::get_user_address_page)
            .service(handlers::user_address::get_user_address)
            .service(handlers::user_address::delete_user_address),
    );
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/user")
            .service(handlers::users::create_user)
            .service(handlers::auth::login)
            .service(handlers::auth::refresh_token)
            .service(
                web::scope("")
                    .wrap(AuthMiddleware::required())
                    .service(handlers::users::get_current_user)
                    .service(handlers::users::delete_user)
                    .service(handlers::auth::logout),
            ),
    );
}

fn configure_address_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/address")
            .service(handlers::address::create_state)
            .service(handlers::address::create_city)
            .service(handlers::address::create_neighborhood)
            .service(handlers::address::create_place)
            .service(handlers::address::get_address_page)
            .service(handlers::address::get_address)
            .service(
                web::scope("")
                    .wrap(AuthMiddleware::required())
                    .service(handlers::address::delete_address),
            ),
    );
}

#[get("/")]
async fn hello() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": "Hello World" }))
}

/// 데이터베이스 ping이 실패하면 503을 반환합니다.
#[get("/health")]
async fn health_check(database: web::Data<Database>) -> HttpResponse {
    match database.ping().await {
        Ok(()) => HttpResponse::Ok().json(json!({
            "message": "Hello World",
            "status": "UP",
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
        Err(e) => {
            log::error!("헬스 체크 실패: {}", e);
            HttpResponse::ServiceUnavailable().json(json!({
                "status": "DOWN",
                "error": e.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339(),
            }))
        }
    }
}
