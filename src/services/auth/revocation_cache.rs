//! 폐기된 토큰 목록 (Denylist)
//!
//! 로그아웃 등으로 폐기된 토큰 문자열을 일정 시간 동안 기억합니다.
//! 요청마다 동시에 조회/삽입되므로 샤딩된 동시성 맵(`DashMap`)을 사용합니다.
//!
//! 만료된 항목은 조회 시점에 즉시 없는 것으로 취급되고 지워지며,
//! 주기적인 정리 작업([`RevocationCache::spawn_sweeper`])이 나머지를 제거합니다.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;

use crate::config::MAX_REVOCATION_TTL;

/// 토큰 문자열 → 만료 시각
#[derive(Debug, Default)]
pub struct RevocationCache {
    entries: DashMap<String, Instant>,
}

impl RevocationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// 토큰을 `ttl` 동안 폐기 상태로 기록합니다. 이미 있으면 만료 시각을 갱신합니다.
    ///
    /// `ttl`은 [`MAX_REVOCATION_TTL`]로 제한됩니다.
    pub fn put(&self, token: &str, ttl: Duration) {
        let expires_at = Instant::now() + ttl.min(MAX_REVOCATION_TTL);
        self.entries.insert(token.to_string(), expires_at);
    }

    /// 만료되지 않은 항목이 있을 때만 `true`입니다.
    pub fn contains(&self, token: &str) -> bool {
        let now = Instant::now();

        let expired = match self.entries.get(token) {
            Some(expires_at) if *expires_at > now => return true,
            Some(_) => true,
            None => false,
        };

        if expired {
            self.entries.remove_if(token, |_, expires_at| *expires_at <= now);
        }
        false
    }

    /// 만료된 항목을 모두 제거하고 제거한 개수를 반환합니다.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut removed = 0;

        self.entries.retain(|_, expires_at| {
            let keep = *expires_at > now;
            if !keep {
                removed += 1;
            }
            keep
        });

        removed
    }

    /// 아직 정리되지 않은 만료 항목을 포함한 개수
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 현재 actix 런타임에 주기적 정리 작업을 등록합니다.
    pub fn spawn_sweeper(cache: Arc<Self>, period: Duration) {
        actix_web::rt::spawn(async move {
            let mut interval = actix_web::rt::time::interval(period);
            loop {
                interval.tick().await;
                let removed = cache.purge_expired();
                if removed > 0 {
                    log::debug!("만료된 폐기 토큰 {}개 정리, 남은 항목 {}개", removed, cache.len());
                }
            }
        });
    }
}
