//! # 사용자 관리 서비스 구현
//!
//! 회원 가입, 로그인, 토큰 갱신, 로그아웃, 현재 사용자 조회, 계정 삭제를 담당합니다.
//!
//! ```text
//! UserService
//! ├── create_user       입력 검증 → 이메일 정규화 → 중복 확인 → bcrypt 해싱 → 저장
//! ├── login             이메일 조회 → 비밀번호 검증 → 토큰 쌍 발급
//! ├── refresh           리프레시 토큰 검증 → 새 액세스 토큰
//! ├── logout            리프레시/액세스 토큰 폐기
//! ├── get_current_user  토큰 주체(이메일)로 조회
//! └── delete_user       논리 삭제
//! ```
//!
//! 로그인 실패 시 "사용자 없음"과 "비밀번호 불일치"는 같은 메시지로 응답합니다.

use std::sync::Arc;

use bcrypt::{hash, verify};
use validator::Validate;

use crate::{
    domain::{
        dto::users::{CreateUserRequest, LoginRequest, UserResponse},
        entities::{Entity, User},
        models::token::TokenPair,
    },
    errors::{AppError, AppResult, ErrorContext},
    repositories::users::UserStore,
    services::auth::TokenService,
    utils::string_utils::{normalize_email, validate_required_string},
};

const INVALID_CREDENTIALS: &str = "잘못된 이메일 또는 비밀번호입니다";

pub struct UserService {
    users: Arc<dyn UserStore>,
    tokens: Arc<TokenService>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>, tokens: Arc<TokenService>, bcrypt_cost: u32) -> Self {
        Self {
            users,
            tokens,
            bcrypt_cost,
        }
    }

    /// 회원 가입
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 입력값 검증 실패
    /// * `AppError::ConflictError` - 같은 이메일의 활성 사용자가 있음
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<UserResponse> {
        request.validate()?;

        let name = validate_required_string(&request.name, "이름")?;
        let email = normalize_email(&request.email);

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        let password_hash =
            hash(&request.password, self.bcrypt_cost).context("비밀번호 해싱 실패")?;

        let created = self
            .users
            .create(User::new_customer(name, email, password_hash))
            .await?;

        log::info!("사용자 생성: {} ({})", created.email, created.id_string());

        Ok(UserResponse::from(created))
    }

    /// 토큰 주체(이메일)에 해당하는 활성 사용자
    pub async fn find_current_user(&self, email: &str) -> AppResult<User> {
        self.users
            .find_by_email(&normalize_email(email))
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }

    pub async fn get_current_user(&self, email: &str) -> AppResult<UserResponse> {
        self.find_current_user(email).await.map(UserResponse::from)
    }

    /// 계정 논리 삭제
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 잘못된 ID 형식
    /// * `AppError::NotFound` - 없거나 이미 삭제된 사용자
    pub async fn delete_user(&self, id: &str) -> AppResult<()> {
        if !self.users.soft_delete(id).await? {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }

        log::info!("사용자 삭제: {}", id);
        Ok(())
    }

    /// 로그인
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 사용자가 없거나 비밀번호가 틀림
    pub async fn login(&self, request: LoginRequest) -> AppResult<TokenPair> {
        request.validate()?;

        let email = normalize_email(&request.email);
        let Some(user) = self.users.find_by_email(&email).await? else {
            log::debug!("로그인 실패 (사용자 없음): {}", email);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        };

        let is_valid =
            verify(&request.password, &user.password_hash).context("비밀번호 검증 실패")?;

        if !is_valid {
            log::debug!("로그인 실패 (비밀번호 불일치): {}", email);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        let pair = self.tokens.issue_token_pair(&user.email)?;
        log::info!("로그인 성공: {}", user.email);

        Ok(pair)
    }

    /// 리프레시 토큰으로 새 액세스 토큰 발급. 리프레시 토큰은 그대로 돌려줍니다.
    pub fn refresh(&self, refresh_token: &str) -> AppResult<TokenPair> {
        self.tokens.refresh_access_token(refresh_token).map_err(|e| {
            log::debug!("토큰 갱신 실패: {}", e);
            AppError::from(e)
        })
    }

    /// 로그아웃
    ///
    /// 요청 본문의 리프레시 토큰과 요청에 사용된 액세스 토큰을 모두 폐기합니다.
    pub fn logout(&self, refresh_token: &str, access_token: &str) {
        self.tokens.invalidate(refresh_token);
        self.tokens.invalidate(access_token);
    }
}
