//! 주소 계층(주, 도시, 동네, 장소) 관리 서비스

pub mod address_service;

pub use address_service::AddressService;
