//! 주소 계층 DTO

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
