//! Request DTOs for the list API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for `POST /api/list/create/:user_id`
#[derive(Debug, Clone, Deserialize)]
pub struct CreateListRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl CreateListRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.title.trim().is_empty() || self.body.trim().is_empty() {
            return Some("Title, description are required".to_string());
        }
        None
    }
}

/// Request body for `PUT /api/list/update/:id`
///
/// Fields left out keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateListRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}
