//! Response Cache Module
//!
//! Shared, lock-protected store of captured HTTP response payloads.

use std::sync::Arc;
use std::time::Duration;

use axum::body::{Body, Bytes};
use axum::http::{header, HeaderValue, Response, StatusCode};
use tokio::sync::RwLock;

use crate::cache::{CacheKey, CacheStats, CacheStore};

// == Cached Response ==
/// The part of a successful response that gets replayed on a hit.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedResponse {
    /// Exact body bytes the handler produced
    pub body: Bytes,
    /// `content-type` the handler set, if any
    pub content_type: Option<HeaderValue>,
}

impl CachedResponse {
    pub fn new(body: impl Into<Bytes>, content_type: Option<HeaderValue>) -> Self {
        Self {
            body: body.into(),
            content_type,
        }
    }

    /// Rebuilds a `200 OK` response carrying the stored payload.
    pub fn to_response(&self) -> Response<Body> {
        let mut response = Response::new(Body::from(self.body.clone()));
        *response.status_mut() = StatusCode::OK;
        if let Some(content_type) = &self.content_type {
            response
                .headers_mut()
                .insert(header::CONTENT_TYPE, content_type.clone());
        }
        response
    }
}

// == Response Cache ==
/// Cloneable handle to the process-wide response store.
///
/// Every operation takes the write lock, since reads may evict. Clones share
/// the same underlying store.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    store: Arc<RwLock<CacheStore<CachedResponse>>>,
}

impl ResponseCache {
    /// Creates an empty cache with the given default TTL.
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            store: Arc::new(RwLock::new(CacheStore::new(default_ttl))),
        }
    }

    pub async fn get(&self, key: &CacheKey) -> Option<CachedResponse> {
        self.store.write().await.get(key.as_str())
    }

    /// Stores `value` under `key` for `ttl`, or the default TTL when `None`.
    pub async fn set(&self, key: &CacheKey, value: CachedResponse, ttl: Option<Duration>) {
        self.store.write().await.set(key.as_str(), value, ttl);
    }

    pub async fn delete(&self, key: &CacheKey) -> bool {
        self.store.write().await.delete(key.as_str())
    }

    pub async fn clear(&self) {
        self.store.write().await.clear();
    }

    /// Drops every expired entry and returns how many were removed.
    pub async fn sweep(&self) -> usize {
        self.store.write().await.sweep()
    }

    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn default_ttl(&self) -> Duration {
        self.store.read().await.default_ttl()
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(crate::cache::DEFAULT_TTL)
    }
}
