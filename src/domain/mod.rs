//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 저장되는 엔티티와 API 계약,
//! 요청 처리 중에 쓰이는 모델을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - MongoDB에 저장되는 객체 (사용자, 주소 계층, 사용자 주소)
//! ├── DTOs      - 요청/응답 본문
//! └── Models    - 인증 주체, 토큰 클레임, 페이지 요청/응답
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 주소 계층
//!
//! ```text
//! State (uf) ── City ── Neighborhood ── Place
//! ```
//!
//! 모든 엔티티는 `Active → Deleted` 논리 삭제만 지원하며, 기본 조회는
//! 삭제된 레코드를 제외합니다. 자식은 생성 시점에만 부모 상태를 확인하고,
//! 부모가 나중에 삭제되어도 자식은 유지됩니다.
//!
//! ## 변환 규칙
//!
//! - Entity → Response DTO: `From` 구현 (`UserResponse::from(user)`)
//! - Request DTO → Entity: 서비스 계층에서 정규화 후 생성자 호출
//! - `ObjectId`는 API 경계에서 항상 16진수 문자열입니다.

pub mod entities;
pub mod dto;
pub mod models;
