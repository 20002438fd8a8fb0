//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 정리, 정규화, 검색 패턴
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::{normalize_email, validate_required_string};
//!
//! let clean_name = validate_required_string("  Ana  ", "이름")?;
//! let email = normalize_email(" Ana@Example.COM ");
//! ```

pub mod string_utils;
