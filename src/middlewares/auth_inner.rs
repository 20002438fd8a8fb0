use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::services::auth::{TokenError, TokenService};

pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let Some(token_service) = req.app_data::<web::Data<TokenService>>().cloned() else {
                log::error!("TokenService가 앱 데이터로 등록되지 않았습니다");
                return Ok(reject(req, AppError::InternalError("인증 설정 오류".to_string())));
            };

            match authenticate(&req, &token_service) {
                Ok(user) => {
                    log::debug!("인증 성공: {}", user.email);
                    req.extensions_mut().insert(user);
                }
                Err(err) => {
                    log::warn!("인증 실패 ({} {}): {}", req.method(), req.path(), err);
                    return Ok(reject(
                        req,
                        AppError::AuthenticationError("유효한 인증 토큰이 필요합니다".to_string()),
                    ));
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

fn reject<B>(req: ServiceRequest, error: AppError) -> ServiceResponse<EitherBody<B>> {
    let (req, _) = req.into_parts();
    ServiceResponse::new(req, error.error_response()).map_into_right_body()
}

fn authenticate(
    req: &ServiceRequest,
    token_service: &TokenService,
) -> Result<AuthenticatedUser, TokenError> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(TokenError::Unauthenticated)?;

    let token = TokenService::extract_bearer_token(auth_header)?;
    let claims = token_service.validate_access_token(token)?;

    Ok(AuthenticatedUser {
        email: claims.email,
        access_token: token.to_string(),
    })
}
