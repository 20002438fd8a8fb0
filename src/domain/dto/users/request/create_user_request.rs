//! 사용자 생성 요청 DTO
//!
//! 회원 가입 요청 본문을 매핑하고 입력값을 검증합니다.
//! 이메일 중복 여부는 서비스 계층에서 확인합니다.
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 회원 가입 요청
///
/// ```json
/// {
///   "name": "Ana Souza",
///   "email": "ana@example.com",
///   "password": "secret1",
///   "confirm_password": "secret1"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_passwords_match"))]
pub struct CreateUserRequest {
    #[validate(length(min = 3, max = 100, message = "이름은 3-100자 사이여야 합니다"))]
    pub name: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 6, max = 100, message = "비밀번호는 6-100자 사이여야 합니다"))]
    pub password: String,

    /// `password`와 같아야 함
    pub confirm_password: String,
}

/// 비밀번호 일치 여부를 검증
fn validate_passwords_match(req: &CreateUserRequest) -> Result<(), ValidationError> {
    if req.password != req.confirm_password {
        return Err(ValidationError::new("passwords_mismatch")
            .with_message("비밀번호가 일치하지 않습니다".into()));
    }
    Ok(())
}
