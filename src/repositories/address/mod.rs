//! 주소 계층 데이터 액세스 계층

pub mod address_repo;

pub use address_repo::{
    city_filter, neighborhood_filter, place_filter, state_filter, AddressRepository,
    AddressStore,
};
