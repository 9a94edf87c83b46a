//! API Handlers
//!
//! HTTP request handlers for the list endpoints plus the health and cache
//! stats endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::api::ListBoard;
use crate::cache::{ResponseCache, DEFAULT_MAX_BODY_BYTES};
use crate::error::{ApiError, Result};
use crate::models::{
    CacheStatsResponse, CreateListRequest, DeleteListResponse, HealthResponse, ListResponse,
    ListsResponse, UpdateListRequest,
};

/// Longest accepted user id
const MAX_USER_ID_LENGTH: usize = 64;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// List storage
    pub lists: ListBoard,
    /// Response cache in front of the read endpoints
    pub cache: ResponseCache,
    /// Largest response body the cache will capture
    pub max_cache_body_bytes: usize,
}

impl AppState {
    /// Creates a new AppState around an existing cache handle.
    pub fn new(cache: ResponseCache) -> Self {
        Self {
            lists: ListBoard::new(),
            cache,
            max_cache_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config, cache: ResponseCache) -> Self {
        Self {
            max_cache_body_bytes: config.max_body_bytes,
            ..Self::new(cache)
        }
    }
}

fn validate_user_id(user_id: &str) -> Result<()> {
    let valid = !user_id.is_empty()
        && user_id.len() <= MAX_USER_ID_LENGTH
        && user_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(ApiError::InvalidRequest("Invalid user ID".to_string()))
    }
}

/// Handler for POST /api/list/create/:user_id
pub async fn create_list(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(req): Json<CreateListRequest>,
) -> Result<(StatusCode, Json<ListResponse>)> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }
    validate_user_id(&user_id)?;

    let list = state.lists.create(&user_id, req.title, req.body).await;
    info!(list_id = %list.id, user_id = %user_id, "List created");

    Ok((StatusCode::CREATED, Json(ListResponse::created(list))))
}

/// Handler for GET /api/list/getlists/:user_id
pub async fn get_lists(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ListsResponse>> {
    validate_user_id(&user_id)?;

    let lists = state.lists.lists_for(&user_id).await;
    Ok(Json(ListsResponse::new(lists)))
}

/// Handler for PUT /api/list/update/:id
pub async fn update_list(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateListRequest>,
) -> Result<Json<ListResponse>> {
    let list = state
        .lists
        .update(&id, req)
        .await
        .ok_or_else(|| ApiError::NotFound("List not found".to_string()))?;

    Ok(Json(ListResponse::updated(list)))
}

/// Handler for DELETE /api/list/delete/:id
pub async fn delete_list(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteListResponse>> {
    let list = state
        .lists
        .delete(&id)
        .await
        .ok_or_else(|| ApiError::NotFound("List not found".to_string()))?;
    info!(list_id = %list.id, "List deleted");

    Ok(Json(DeleteListResponse::new(&list)))
}

/// Handler for GET /cache/stats
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    Json(state.cache.stats().await.into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(ResponseCache::default())
    }

    fn create_req(title: &str, body: &str) -> Json<CreateListRequest> {
        Json(CreateListRequest {
            title: title.to_string(),
            body: body.to_string(),
        })
    }

    #[tokio::test]
    async fn test_create_and_get_lists() {
        let state = state();

        let (status, created) = create_list(
            State(state.clone()),
            Path("u1".to_string()),
            create_req("Chores", "dishes"),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created.list.title, "Chores");

        let response = get_lists(State(state), Path("u1".to_string()))
            .await
            .unwrap();
        assert_eq!(response.count, 1);
        assert_eq!(response.lists[0].id, created.list.id);
    }

    #[tokio::test]
    async fn test_create_requires_title_and_body() {
        let result = create_list(
            State(state()),
            Path("u1".to_string()),
            create_req("", "dishes"),
        )
        .await;
        assert!(matches!(result, Err(ApiError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_get_lists_rejects_bad_user_id() {
        let result = get_lists(State(state()), Path("bad id!".to_string())).await;
        assert!(matches!(result, Err(ApiError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_update_and_delete_unknown_list() {
        let state = state();

        let result = update_list(
            State(state.clone()),
            Path("99".to_string()),
            Json(UpdateListRequest::default()),
        )
        .await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));

        let result = delete_list(State(state), Path("99".to_string())).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_cache_stats_handler() {
        let response = cache_stats_handler(State(state())).await;
        assert_eq!(response.hits, 0);
        assert_eq!(response.total_entries, 0);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }

    #[test]
    fn test_validate_user_id() {
        assert!(validate_user_id("123").is_ok());
        assert!(validate_user_id("64b7f0c2e4a1d9a3f8c1b2e0").is_ok());
        assert!(validate_user_id("").is_err());
        assert!(validate_user_id(&"x".repeat(MAX_USER_ID_LENGTH + 1)).is_err());
        assert!(validate_user_id("a/b").is_err());
    }
}
