//! # Composition Root
//!
//! 시작 시점에 리포지토리와 서비스를 한 번 생성해 `web::Data`로 공유합니다.
//!
//! ```text
//! Database ─┬─ UserRepository ───────────┬─ UserService ◄── TokenService ◄── RevocationCache
//!           ├─ AddressRepository ─┬──────┼─ AddressService
//!           │                     └─ HierarchyValidator
//!           └─ UserAddressRepository ────┴─ UserAddressService
//! ```

use std::sync::Arc;

use actix_web::web;

use crate::config::{JwtSettings, PageLimits};
use crate::db::Database;
use crate::errors::{AppResult, ErrorContext};
use crate::repositories::{
    address::AddressRepository, user_address::UserAddressRepository, users::UserRepository,
};
use crate::services::{
    address::AddressService,
    auth::{RevocationCache, TokenService},
    hierarchy::HierarchyValidator,
    user_address::UserAddressService,
    users::UserService,
};

/// 애플리케이션 전역 상태
///
/// `HttpServer::new` 클로저가 워커마다 호출되므로 `Clone`은 `Arc` 복사만 수행합니다.
#[derive(Clone)]
pub struct AppState {
    pub database: web::Data<Database>,
    pub revocations: Arc<RevocationCache>,
    pub token_service: web::Data<TokenService>,
    pub user_service: web::Data<UserService>,
    pub address_service: web::Data<AddressService>,
    pub user_address_service: web::Data<UserAddressService>,
    pub page_limits: web::Data<PageLimits>,
    user_repo: Arc<UserRepository>,
    address_repo: Arc<AddressRepository>,
    user_address_repo: Arc<UserAddressRepository>,
}

impl AppState {
    pub fn build(
        database: Database,
        jwt: JwtSettings,
        bcrypt_cost: u32,
        page_limits: PageLimits,
    ) -> Self {
        let revocations = Arc::new(RevocationCache::new());
        let token_service = Arc::new(TokenService::new(jwt, revocations.clone()));

        let user_repo = Arc::new(UserRepository::new(&database));
        let address_repo = Arc::new(AddressRepository::new(&database));
        let user_address_repo = Arc::new(UserAddressRepository::new(&database));

        let hierarchy = Arc::new(HierarchyValidator::new(
            address_repo.states.clone(),
            address_repo.cities.clone(),
            address_repo.neighborhoods.clone(),
            address_repo.places.clone(),
        ));

        let user_service = UserService::new(user_repo.clone(), token_service.clone(), bcrypt_cost);
        let address_service = AddressService::new(address_repo.clone(), hierarchy.clone());
        let user_address_service =
            UserAddressService::new(user_repo.clone(), user_address_repo.clone(), hierarchy);

        log::info!("서비스 구성 완료 (bcrypt cost={}, {:?})", bcrypt_cost, page_limits);

        Self {
            database: web::Data::new(database),
            revocations,
            token_service: web::Data::from(token_service),
            user_service: web::Data::new(user_service),
            address_service: web::Data::new(address_service),
            user_address_service: web::Data::new(user_address_service),
            page_limits: web::Data::new(page_limits),
            user_repo,
            address_repo,
            user_address_repo,
        }
    }

    /// 모든 컬렉션의 인덱스 생성. 이미 있으면 그대로 둡니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        self.user_repo
            .create_indexes()
            .await
            .with_context(|| "users 인덱스".to_string())?;
        self.address_repo
            .create_indexes()
            .await
            .with_context(|| "주소 계층 인덱스".to_string())?;
        self.user_address_repo
            .create_indexes()
            .await
            .with_context(|| "user_addresses 인덱스".to_string())?;
        log::info!("인덱스 생성 완료");
        Ok(())
    }

    /// 핸들러와 미들웨어가 추출할 앱 데이터를 등록합니다.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.database.clone())
            .app_data(self.token_service.clone())
            .app_data(self.user_service.clone())
            .app_data(self.address_service.clone())
            .app_data(self.user_address_service.clone())
            .app_data(self.page_limits.clone());
    }
}
