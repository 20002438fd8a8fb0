//! 사용자 주소 데이터 액세스 계층

pub mod user_address_repo;

pub use user_address_repo::UserAddressRepository;
