//! In-memory list storage
//!
//! Stands in for the persistence layer behind the list handlers.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::{TaskList, UpdateListRequest};

#[derive(Debug, Default)]
struct BoardInner {
    next_id: u64,
    /// Keyed by numeric id, so iteration order is creation order
    lists: BTreeMap<u64, TaskList>,
}

/// Shared collection of task lists.
#[derive(Debug, Clone, Default)]
pub struct ListBoard {
    inner: Arc<RwLock<BoardInner>>,
}

impl ListBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, user_id: &str, title: String, body: String) -> TaskList {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let id = inner.next_id;
        let list = TaskList::new(id.to_string(), user_id, title, body);
        inner.lists.insert(id, list.clone());
        list
    }

    /// Returns the user's lists, newest first.
    pub async fn lists_for(&self, user_id: &str) -> Vec<TaskList> {
        let inner = self.inner.read().await;
        inner
            .lists
            .values()
            .rev()
            .filter(|list| list.user == user_id)
            .cloned()
            .collect()
    }

    pub async fn update(&self, id: &str, changes: UpdateListRequest) -> Option<TaskList> {
        let id = id.parse::<u64>().ok()?;
        let mut inner = self.inner.write().await;
        let list = inner.lists.get_mut(&id)?;

        if let Some(title) = changes.title {
            list.title = title;
        }
        if let Some(body) = changes.body {
            list.body = body;
        }
        list.updated_at = Utc::now();
        Some(list.clone())
    }

    pub async fn delete(&self, id: &str) -> Option<TaskList> {
        let id = id.parse::<u64>().ok()?;
        self.inner.write().await.lists.remove(&id)
    }
}
