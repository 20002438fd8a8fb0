//! 사용자 배송지 관리 서비스

pub mod user_address_service;

pub use user_address_service::UserAddressService;
