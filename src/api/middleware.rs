//! Response caching middleware
//!
//! Serves repeated `GET` requests from the [`ResponseCache`] and records the
//! payload of every `200 OK` miss. All other methods pass straight through.
//!
//! ```ignore
//! let layer = CacheLayer::new(cache).with_ttl(Duration::from_secs(30));
//! let router = Router::new()
//!     .route("/getlists/:user_id", get(get_lists))
//!     .layer(middleware::from_fn_with_state(layer, cache_response));
//! ```

use std::time::Duration;

use axum::{
    body::{to_bytes, Body, HttpBody},
    extract::{OriginalUri, Request, State},
    http::{header, HeaderName, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use crate::cache::{CacheKey, CachedResponse, ResponseCache, DEFAULT_MAX_BODY_BYTES};

/// Header reporting whether a response came from the cache
pub const CACHE_STATUS_HEADER: HeaderName = HeaderName::from_static("x-cache");

const HIT: HeaderValue = HeaderValue::from_static("HIT");
const MISS: HeaderValue = HeaderValue::from_static("MISS");

/// Middleware state: the shared cache plus per-mount settings.
#[derive(Debug, Clone)]
pub struct CacheLayer {
    cache: ResponseCache,
    /// None uses the cache's default TTL
    ttl: Option<Duration>,
    max_body_bytes: usize,
}

impl CacheLayer {
    pub fn new(cache: ResponseCache) -> Self {
        Self {
            cache,
            ttl: None,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    /// Overrides the TTL for responses captured by this mount.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}

/// Middleware for use with `axum::middleware::from_fn_with_state`.
pub async fn cache_response(
    State(layer): State<CacheLayer>,
    request: Request,
    next: Next,
) -> Response {
    if *request.method() != Method::GET {
        return next.run(request).await;
    }

    let key = request_key(&request);

    if let Some(cached) = layer.cache.get(&key).await {
        debug!(key = %key, "Response cache hit");
        return with_cache_status(cached.to_response(), HIT);
    }

    debug!(key = %key, "Response cache miss");
    let response = next.run(request).await;

    let response = if response.status() == StatusCode::OK {
        store_response(&layer, &key, response).await
    } else {
        response
    };

    with_cache_status(response, MISS)
}

/// Key from the path as received by the server, before any `nest` prefix
/// stripping.
fn request_key(request: &Request) -> CacheKey {
    let uri = request
        .extensions()
        .get::<OriginalUri>()
        .map(|original| &original.0)
        .unwrap_or_else(|| request.uri());
    CacheKey::from_uri(uri)
}

/// Buffers the body, stores a copy and returns an equivalent response.
///
/// Bodies without a known size within the limit are returned untouched and
/// not stored.
async fn store_response(layer: &CacheLayer, key: &CacheKey, response: Response) -> Response {
    let within_limit = response
        .body()
        .size_hint()
        .upper()
        .is_some_and(|upper| upper <= layer.max_body_bytes as u64);
    if !within_limit {
        debug!(key = %key, "Response body too large or unsized, not caching");
        return response;
    }

    let (parts, body) = response.into_parts();
    let bytes = match to_bytes(body, layer.max_body_bytes).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(key = %key, error = %e, "Failed to read response body for caching");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let content_type = parts.headers.get(header::CONTENT_TYPE).cloned();
    layer
        .cache
        .set(key, CachedResponse::new(bytes.clone(), content_type), layer.ttl)
        .await;

    Response::from_parts(parts, Body::from(bytes))
}

fn with_cache_status(mut response: Response, status: HeaderValue) -> Response {
    response.headers_mut().insert(CACHE_STATUS_HEADER, status);
    response
}
