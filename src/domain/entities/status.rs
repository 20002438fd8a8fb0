//! 엔티티 생명주기 상태
//!
//! 모든 주소 계층 엔티티와 사용자는 `Active → Deleted` 한 방향 전이만 가집니다.
//! 삭제는 논리 삭제이며 레코드는 물리적으로 제거되지 않습니다.

use serde::{Deserialize, Serialize};

/// 엔티티 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Active,
    Deleted,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Deleted => "deleted",
        }
    }

    pub fn is_deleted(&self) -> bool {
        matches!(self, Status::Deleted)
    }
}

/// 논리 삭제를 지원하는 엔티티
pub trait Lifecycle {
    fn status(&self) -> Status;

    fn is_deleted(&self) -> bool {
        self.status().is_deleted()
    }
}
