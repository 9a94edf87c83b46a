//! Task list record

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A titled task list owned by a user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskList {
    pub id: String,
    pub title: String,
    pub body: String,
    /// Owning user's id
    pub user: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl TaskList {
    pub fn new(id: impl Into<String>, user: impl Into<String>, title: String, body: String) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            title,
            body,
            user: user.into(),
            created_at: now,
            updated_at: now,
        }
    }
}
