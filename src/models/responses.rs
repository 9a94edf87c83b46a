//! Response DTOs for the list API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::models::TaskList;

/// Response body for `GET /api/list/getlists/:user_id`
#[derive(Debug, Clone, Serialize)]
pub struct ListsResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub count: usize,
    pub lists: Vec<TaskList>,
}

impl ListsResponse {
    pub fn new(lists: Vec<TaskList>) -> Self {
        let message = lists
            .is_empty()
            .then(|| "No lists found for this user".to_string());
        Self {
            success: true,
            message,
            count: lists.len(),
            lists,
        }
    }
}

/// Response body for create and update
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
    pub success: bool,
    pub message: String,
    pub list: TaskList,
}

impl ListResponse {
    pub fn created(list: TaskList) -> Self {
        Self {
            success: true,
            message: "List created successfully".to_string(),
            list,
        }
    }

    pub fn updated(list: TaskList) -> Self {
        Self {
            success: true,
            message: "List updated successfully".to_string(),
            list,
        }
    }
}

/// Summary of a removed list
#[derive(Debug, Clone, Serialize)]
pub struct DeletedList {
    pub id: String,
    pub title: String,
}

/// Response body for `DELETE /api/list/delete/:id`
#[derive(Debug, Clone, Serialize)]
pub struct DeleteListResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "deletedList")]
    pub deleted_list: DeletedList,
}

impl DeleteListResponse {
    pub fn new(list: &TaskList) -> Self {
        Self {
            success: true,
            message: "List deleted successfully".to_string(),
            deleted_list: DeletedList {
                id: list.id.clone(),
                title: list.title.clone(),
            },
        }
    }
}

/// Response body for the cache stats endpoint (GET /cache/stats)
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub expirations: u64,
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for CacheStatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            expirations: stats.expirations,
            total_entries: stats.total_entries,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
