//! Cache Module
//!
//! In-memory response caching with TTL expiration and periodic sweeping.

mod entry;
mod key;
mod response;
mod service;
mod stats;
mod store;


use std::time::Duration;

// Re-export public types
pub use entry::CacheEntry;
pub use key::CacheKey;
pub use response::{CachedResponse, ResponseCache};
pub use service::CacheService;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// TTL applied when a caller does not choose one
pub const DEFAULT_TTL: Duration = Duration::from_millis(60_000);

/// Interval between background sweeps
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_millis(300_000);

/// Largest response body the interceptor will capture
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024; // 1 MB
