//! listcache - Task-list API server with an in-process response cache
//!
//! Read requests to the list API are answered from a TTL cache when possible;
//! a background task sweeps out entries that expired without being read again.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{CacheService, ResponseCache};
pub use config::Config;
pub use tasks::SweepScheduler;
