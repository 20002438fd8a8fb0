//! 페이지 요청/응답 모델
//!
//! 모든 목록 엔드포인트가 공유하는 페이지 요청(`page`, `size`, `sort`)과
//! 페이지 응답 JSON 형태를 정의합니다.
//!
//! ## 쿼리 파라미터
//!
//! ```text
//! GET /address/state/paginated?page=0&size=15&sort=name,desc&sort=id
//! ```
//!
//! - `page`: 0부터 시작하는 페이지 번호 (기본값 0)
//! - `size`: 페이지 크기 (기본값 15, 0 불가, 최대값 초과 불가)
//! - `sort`: `field` 또는 `field,direction` 형식, 여러 번 지정 가능.
//!   방향 생략 시 오름차순이며 빈 필드 이름은 무시됩니다.
//!
//! ## 응답 JSON
//!
//! ```json
//! {
//!   "content": [],
//!   "empty": true, "first": true, "last": true,
//!   "number": 0, "numberOfElements": 0, "size": 15,
//!   "totalElements": 0, "totalPages": 0,
//!   "pageable": { "offset": 0, "pageNumber": 0, "pageSize": 15, "paged": true, "unpaged": false,
//!                 "sort": { "sorted": false, "unsorted": true, "empty": true } },
//!   "sort": { "sorted": false, "unsorted": true, "empty": true }
//! }
//! ```

use std::future::{ready, Ready};

use actix_web::{web, FromRequest, HttpRequest};
use serde::Serialize;

use crate::config::PageLimits;
use crate::errors::{AppError, AppResult};

/// 정렬 방향
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    /// 대소문자 구분 없이 `desc`만 내림차순으로 해석하고, 나머지는 오름차순입니다.
    pub fn parse(token: &str) -> Self {
        if token.trim().eq_ignore_ascii_case("desc") {
            Direction::Desc
        } else {
            Direction::Asc
        }
    }

    /// MongoDB 정렬 값 (1 / -1)
    pub fn as_mongo(&self) -> i32 {
        match self {
            Direction::Asc => 1,
            Direction::Desc => -1,
        }
    }
}

/// `field[,direction]` 형태의 정렬 키
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub field: String,
    pub direction: Direction,
}

impl SortKey {
    pub fn new(field: impl Into<String>, direction: Direction) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// 정렬 파라미터 하나를 해석합니다. 필드 이름이 비어 있으면 `None`입니다.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.splitn(2, ',');
        let field = parts.next().unwrap_or_default().trim();
        if field.is_empty() {
            return None;
        }

        let direction = parts.next().map(Direction::parse).unwrap_or_default();
        Some(Self::new(field, direction))
    }
}

/// 정렬 가능한 엔티티
///
/// API에 노출되는 필드 이름과 저장소 필드 이름의 대응표를 선언합니다.
/// 대응표에 없는 필드로 정렬을 요청하면 해당 키는 조용히 무시됩니다.
pub trait SortableEntity {
    const SORT_FIELDS: &'static [(&'static str, &'static str)];

    fn storage_field(api_field: &str) -> Option<&'static str> {
        Self::SORT_FIELDS
            .iter()
            .find(|(api, _)| *api == api_field)
            .map(|(_, storage)| *storage)
    }
}

/// 페이지 요청
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
    pub sort: Vec<SortKey>,
}

impl PageRequest {
    /// # Errors
    ///
    /// * `AppError::ValidationError` - `size`가 0이거나 오프셋(`page * size`)이 `i64` 범위를 넘는 경우
    pub fn new(page: u64, size: u64) -> AppResult<Self> {
        if size == 0 {
            return Err(AppError::ValidationError("size는 0보다 커야 합니다".to_string()));
        }

        // MongoDB skip은 i64
        match page.checked_mul(size) {
            Some(offset) if offset <= i64::MAX as u64 => {}
            _ => {
                return Err(AppError::ValidationError(format!(
                    "page가 너무 큽니다: {}",
                    page
                )))
            }
        }

        Ok(Self {
            page,
            size,
            sort: Vec::new(),
        })
    }

    pub fn with_sort(mut self, sort: Vec<SortKey>) -> Self {
        self.sort = sort;
        self
    }

    /// `new`에서 범위를 검사하므로 넘치지 않습니다.
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }

    /// 원시 쿼리 문자열에서 페이지 요청을 만듭니다.
    ///
    /// `sort`는 여러 번 나타날 수 있으므로 `web::Query` 대신 직접 해석합니다.
    /// 페이지 관련이 아닌 파라미터(필터 등)는 무시합니다.
    pub fn from_query(query: &str, limits: &PageLimits) -> AppResult<Self> {
        let mut page = 0;
        let mut size = limits.default_size;
        let mut sort = Vec::new();

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_component(raw_key)?;
            let value = decode_component(raw_value)?;

            match key.as_str() {
                "page" if !value.trim().is_empty() => {
                    page = value.trim().parse::<u64>().map_err(|_| {
                        AppError::ValidationError(format!(
                            "page는 0 이상의 정수여야 합니다: '{}'",
                            value
                        ))
                    })?;
                }
                "size" if !value.trim().is_empty() => {
                    size = value.trim().parse::<u64>().map_err(|_| {
                        AppError::ValidationError(format!("size는 양의 정수여야 합니다: '{}'", value))
                    })?;
                }
                "sort" => sort.extend(SortKey::parse(&value)),
                _ => {}
            }
        }

        if size > limits.max_size {
            return Err(AppError::ValidationError(format!(
                "size는 {} 이하여야 합니다",
                limits.max_size
            )));
        }

        Ok(Self::new(page, size)?.with_sort(sort))
    }
}

fn decode_component(raw: &str) -> AppResult<String> {
    urlencoding::decode(&raw.replace('+', " "))
        .map(|s| s.into_owned())
        .map_err(|_| AppError::ValidationError("쿼리 문자열 인코딩이 올바르지 않습니다".to_string()))
}

impl FromRequest for PageRequest {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let limits = req
            .app_data::<web::Data<PageLimits>>()
            .map(|data| data.get_ref().clone())
            .unwrap_or_default();

        ready(Self::from_query(req.query_string(), &limits))
    }
}

/// 정렬 메타데이터
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortInfo {
    pub empty: bool,
    pub sorted: bool,
    pub unsorted: bool,
}

impl SortInfo {
    /// 실제로 적용된 정렬 키 개수로부터 만듭니다.
    pub fn from_applied(applied: usize) -> Self {
        Self {
            empty: applied == 0,
            sorted: applied > 0,
            unsorted: applied == 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageableInfo {
    pub offset: u64,
    pub page_number: u64,
    pub page_size: u64,
    pub paged: bool,
    pub unpaged: bool,
    pub sort: SortInfo,
}

/// 페이지 응답
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub empty: bool,
    pub first: bool,
    pub last: bool,
    pub number: u64,
    pub number_of_elements: u64,
    pub pageable: PageableInfo,
    pub size: u64,
    pub sort: SortInfo,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    /// 페이지 메타데이터를 계산합니다.
    ///
    /// - `total_pages = ceil(total_elements / size)`
    /// - `first = (page == 0)`
    /// - `last = (page == total_pages - 1) || total_elements == 0`
    pub fn assemble(
        content: Vec<T>,
        request: &PageRequest,
        applied_sort_keys: usize,
        total_elements: u64,
    ) -> Self {
        let size = request.size;
        let total_pages = total_elements.div_ceil(size);
        let sort = SortInfo::from_applied(applied_sort_keys);
        let number_of_elements = content.len() as u64;

        Self {
            empty: content.is_empty(),
            first: request.page == 0,
            last: total_elements == 0 || request.page.checked_add(1) == Some(total_pages),
            number: request.page,
            number_of_elements,
            pageable: PageableInfo {
                offset: request.offset(),
                page_number: request.page,
                page_size: size,
                paged: true,
                unpaged: false,
                sort,
            },
            size,
            sort,
            total_elements,
            total_pages,
            content,
        }
    }

    /// 내용물만 변환하고 메타데이터는 유지합니다.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            empty: self.empty,
            first: self.first,
            last: self.last,
            number: self.number,
            number_of_elements: self.number_of_elements,
            pageable: self.pageable,
            size: self.size,
            sort: self.sort,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}
