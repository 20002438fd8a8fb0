//! 페이지네이션 엔진
//!
//! 필터가 이미 적용된 컬렉션([`PageSource`])을 받아 정렬, 개수 세기,
//! 구간 조회, 메타데이터 계산을 수행합니다. 필터 조건은 호출자가 만들고,
//! 엔진은 어떤 엔티티인지 알지 못합니다.
//!
//! ```rust,ignore
//! let source = repo.states.page_source(filter);
//! let page: Page<State> = paginate(&source, &page_request).await?;
//! ```

use std::cmp::Ordering;
use std::collections::HashSet;

use async_trait::async_trait;

use crate::domain::models::pagination::{Direction, Page, PageRequest, SortKey, SortableEntity};
use crate::errors::AppResult;

/// 저장소 필드 이름으로 확정된 정렬 기준
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSort {
    pub field: &'static str,
    pub direction: Direction,
}

/// 정렬, 개수 세기, 구간 조회가 가능한 컬렉션
///
/// `count`와 `fetch`는 같은 필터 조건을 사용해야 합니다.
#[async_trait]
pub trait PageSource<T>: Send + Sync {
    /// 구간 제한 없이 필터에 맞는 전체 개수
    async fn count(&self) -> AppResult<u64>;

    /// 정렬 후 `offset`부터 최대 `limit`개
    async fn fetch(&self, sort: &[ResolvedSort], offset: u64, limit: u64) -> AppResult<Vec<T>>;
}

/// 요청된 정렬 키를 엔티티의 정렬 가능 필드로 변환합니다.
///
/// 알 수 없는 필드와 이미 나온 필드는 건너뛰고, 요청 순서는 유지합니다.
pub fn resolve_sort<T: SortableEntity>(keys: &[SortKey]) -> Vec<ResolvedSort> {
    let mut seen = HashSet::new();

    keys.iter()
        .filter_map(|key| match T::storage_field(&key.field) {
            Some(field) => Some(ResolvedSort {
                field,
                direction: key.direction,
            }),
            None => {
                log::debug!("정렬할 수 없는 필드 무시: {}", key.field);
                None
            }
        })
        .filter(|resolved| seen.insert(resolved.field))
        .collect()
}

/// 한 페이지를 조회합니다.
///
/// 저장소 오류는 그대로 전파되며 부분 결과는 반환하지 않습니다.
pub async fn paginate<T, S>(source: &S, request: &PageRequest) -> AppResult<Page<T>>
where
    T: SortableEntity,
    S: PageSource<T> + ?Sized,
{
    let sort = resolve_sort::<T>(&request.sort);

    let total_elements = source.count().await?;
    let content = source.fetch(&sort, request.offset(), request.size).await?;

    Ok(Page::assemble(content, request, sort.len(), total_elements))
}

/// 메모리 내 정렬 값
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Text(String),
    Number(f64),
}

impl SortValue {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
            (SortValue::Number(_), SortValue::Text(_)) => Ordering::Less,
            (SortValue::Text(_), SortValue::Number(_)) => Ordering::Greater,
        }
    }
}

/// 메모리에서 정렬할 수 있는 엔티티
pub trait InMemorySortable: SortableEntity {
    /// 저장소 필드 이름에 해당하는 값
    fn sort_value(&self, field: &str) -> Option<SortValue>;
}

/// 메모리 내 컬렉션
///
/// 저장소 없이 엔진을 구동할 때 사용합니다. 필터는 생성 전에 적용합니다.
pub struct VecSource<T> {
    items: Vec<T>,
}

impl<T> VecSource<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl<T> PageSource<T> for VecSource<T>
where
    T: InMemorySortable + Clone + Send + Sync,
{
    async fn count(&self) -> AppResult<u64> {
        Ok(self.items.len() as u64)
    }

    async fn fetch(&self, sort: &[ResolvedSort], offset: u64, limit: u64) -> AppResult<Vec<T>> {
        let mut items = self.items.clone();

        if !sort.is_empty() {
            items.sort_by(|a, b| {
                sort.iter()
                    .map(|key| {
                        let ordering = match (a.sort_value(key.field), b.sort_value(key.field)) {
                            (Some(x), Some(y)) => x.compare(&y),
                            (None, Some(_)) => Ordering::Less,
                            (Some(_), None) => Ordering::Greater,
                            (None, None) => Ordering::Equal,
                        };
                        match key.direction {
                            Direction::Asc => ordering,
                            Direction::Desc => ordering.reverse(),
                        }
                    })
                    .find(|ordering| *ordering != Ordering::Equal)
                    .unwrap_or(Ordering::Equal)
            });
        }

        Ok(items
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        name: &'static str,
    }

    impl SortableEntity for Row {
        const SORT_FIELDS: &'static [(&'static str, &'static str)] =
            &[("id", "_id"), ("name", "name")];
    }

    impl InMemorySortable for Row {
        fn sort_value(&self, field: &str) -> Option<SortValue> {
            match field {
                "_id" => Some(SortValue::Number(self.id as f64)),
                "name" => Some(SortValue::Text(self.name.to_string())),
                _ => None,
            }
        }
    }

    fn rows(n: u32) -> Vec<Row> {
        (0..n).map(|id| Row { id, name: "row" }).collect()
    }

    fn request(page: u64, size: u64, sort: &[(&str, Direction)]) -> PageRequest {
        PageRequest::new(page, size)
            .unwrap()
            .with_sort(sort.iter().map(|(f, d)| SortKey::new(*f, *d)).collect())
    }

    struct FailingSource;

    #[async_trait]
    impl PageSource<Row> for FailingSource {
        async fn count(&self) -> AppResult<u64> {
            Err(AppError::DatabaseError("storage unavailable".to_string()))
        }

        async fn fetch(&self, _: &[ResolvedSort], _: u64, _: u64) -> AppResult<Vec<Row>> {
            Ok(Vec::new())
        }
    }

    #[actix_web::test]
    async fn test_42_rows_in_pages_of_15() {
        let source = VecSource::new(rows(42));

        let first = paginate(&source, &request(0, 15, &[("id", Direction::Asc)])).await.unwrap();
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.number_of_elements, 15);
        assert!(first.first);
        assert!(!first.last);
        assert_eq!(first.content[0].id, 0);

        let last = paginate(&source, &request(2, 15, &[("id", Direction::Asc)])).await.unwrap();
        assert_eq!(last.number_of_elements, 12);
        assert!(last.last);
        assert_eq!(last.content[0].id, 30);
        assert_eq!(last.content[11].id, 41);
    }

    #[actix_web::test]
    async fn test_name_desc_then_id_asc() {
        let source = VecSource::new(vec![
            Row { id: 4, name: "b" },
            Row { id: 1, name: "c" },
            Row { id: 3, name: "b" },
            Row { id: 2, name: "a" },
            Row { id: 0, name: "c" },
        ]);

        let page = paginate(
            &source,
            &request(0, 10, &[("name", Direction::Desc), ("id", Direction::Asc)]),
        )
        .await
        .unwrap();

        let order: Vec<u32> = page.content.iter().map(|r| r.id).collect();
        assert_eq!(order, vec![0, 1, 3, 4, 2]);
        assert!(page.sort.sorted);
    }

    #[actix_web::test]
    async fn test_unknown_sort_field_is_skipped() {
        let source = VecSource::new(vec![
            Row { id: 2, name: "x" },
            Row { id: 0, name: "y" },
            Row { id: 1, name: "z" },
        ]);

        let page = paginate(
            &source,
            &request(0, 10, &[("bogusfield", Direction::Asc), ("id", Direction::Desc)]),
        )
        .await
        .unwrap();

        let order: Vec<u32> = page.content.iter().map(|r| r.id).collect();
        assert_eq!(order, vec![2, 1, 0]);
    }

    #[actix_web::test]
    async fn test_only_unknown_fields_means_unsorted() {
        let source = VecSource::new(rows(3));
        let page = paginate(&source, &request(0, 10, &[("bogusfield", Direction::Asc)]))
            .await
            .unwrap();

        assert_eq!(page.content.len(), 3);
        assert!(page.sort.unsorted);
        assert!(!page.pageable.sort.sorted);
    }

    #[actix_web::test]
    async fn test_page_past_the_end_is_empty() {
        let source = VecSource::new(rows(5));
        let page = paginate(&source, &request(3, 5, &[])).await.unwrap();

        assert!(page.content.is_empty());
        assert!(page.empty);
        assert_eq!(page.total_elements, 5);
        assert!(!page.last);
    }

    #[actix_web::test]
    async fn test_storage_error_propagates() {
        let result = paginate(&FailingSource, &request(0, 10, &[])).await;
        assert!(matches!(result, Err(AppError::DatabaseError(_))));
    }

    #[test]
    fn test_resolve_sort_maps_and_dedupes() {
        let keys = vec![
            SortKey::new("id", Direction::Desc),
            SortKey::new("", Direction::Asc),
            SortKey::new("id", Direction::Asc),
            SortKey::new("name", Direction::Asc),
        ];

        let resolved = resolve_sort::<Row>(&keys);
        assert_eq!(
            resolved,
            vec![
                ResolvedSort { field: "_id", direction: Direction::Desc },
                ResolvedSort { field: "name", direction: Direction::Asc },
            ]
        );
    }
}
