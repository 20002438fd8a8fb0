//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 요청/응답 본문을 정의합니다.
//! 요청 DTO는 `validator`로 입력값을 검증하고, 응답 DTO는 엔티티에서
//! `From` 변환으로 만들어지며 `ObjectId`는 16진수 문자열, 시각은 RFC 3339로 노출됩니다.
//!
//! ```text
//! dto/
//! ├── users/           # 회원 가입, 로그인, 토큰 갱신, 로그아웃, 사용자 응답
//! ├── address/         # 주/도시/동네/장소 생성 요청, 목록 필터, 응답
//! └── user_address.rs  # 사용자 주소 등록 요청과 응답
//! ```

pub mod users;
pub mod address;
pub mod user_address;
