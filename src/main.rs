//! 주소 서비스 메인 애플리케이션
//!
//! Actix-web 기반 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! MongoDB 연결, 인덱스 생성, 토큰 폐기 목록 정리 작업을 준비한 뒤
//! JWT 인증 기반 REST API를 제공합니다.

use std::time::Duration;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use address_service_backend::config::{
    CorsConfig, JwtConfig, JwtSettings, PaginationConfig, PasswordConfig, RateLimitConfig,
    ServerConfig,
};
use address_service_backend::db::Database;
use address_service_backend::routes::configure_all_routes;
use address_service_backend::services::auth::RevocationCache;
use address_service_backend::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 주소 서비스 시작중...");

    let state = initialize_state().await;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(state).await
}

/// 설정 로드, 데이터베이스 연결, 서비스 구성, 인덱스 생성을 수행합니다.
///
/// 필수 설정이 없거나 데이터베이스에 연결할 수 없으면 프로세스를 종료합니다.
async fn initialize_state() -> AppState {
    let jwt = JwtSettings::from_env().unwrap_or_else(|e| exit_with("JWT 설정 로드 실패", e));
    info!("🔑 JWT 설정: {:?}", jwt);

    info!("📡 데이터베이스 연결 중...");
    let database = Database::new()
        .await
        .unwrap_or_else(|e| exit_with("데이터베이스 연결 실패", e));

    let state = AppState::build(
        database,
        jwt,
        PasswordConfig::bcrypt_cost(),
        PaginationConfig::limits(),
    );

    if let Err(e) = state.create_indexes().await {
        exit_with("인덱스 생성 실패", e);
    }

    let sweep_minutes = JwtConfig::revocation_sweep_minutes().clamp(1, 24 * 60) as u64;
    RevocationCache::spawn_sweeper(
        state.revocations.clone(),
        Duration::from_secs(sweep_minutes * 60),
    );
    info!("🧹 폐기 토큰 정리 주기: {}분", sweep_minutes);

    state
}

fn exit_with(context: &str, e: impl std::fmt::Display) -> ! {
    error!("❌ {}: {}", context, e);
    std::process::exit(1);
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(state: AppState) -> std::io::Result<()> {
    let host = ServerConfig::host();
    let port = ServerConfig::port();

    info!("🌐 서버가 http://{}:{} 에서 실행중입니다", host, port);
    info!("📍 Health check: http://{}:{}/health", host, port);

    let rate_limit = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit.per_second)
        .burst_size(rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "Rate Limiting 설정이 올바르지 않습니다")
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit.per_second, rate_limit.burst_size
    );

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(|cfg| state.configure(cfg))
            .configure(configure_all_routes)
    })
    .bind((host.as_str(), port))?
    .workers(ServerConfig::workers())
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    // 로거 초기화 전이므로 표준 출력을 사용
    println!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            if let Err(e) = dotenv::from_filename(".env.dev") {
                eprintln!(".env.dev 파일 로드 실패: {}", e);
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// `ALLOWED_ORIGINS`가 없으면 모든 Origin을 허용하며, 이때는 자격 증명을 지원하지 않습니다.
fn configure_cors() -> Cors {
    let origins = CorsConfig::allowed_origins();

    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .max_age(CorsConfig::MAX_AGE_SECONDS);

    if origins.iter().any(|o| o == "*") {
        return cors.allow_any_origin();
    }

    origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
        .supports_credentials()
}
