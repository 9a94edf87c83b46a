//! Cache Service Module
//!
//! Owns the process-wide response cache and the sweep task that maintains it.

use std::time::Duration;

use tracing::info;

use crate::cache::ResponseCache;
use crate::config::Config;
use crate::tasks::SweepScheduler;

// == Cache Service ==
/// Startup-constructed owner of the response cache.
///
/// Hand [`cache`](Self::cache) clones to the request layer and call
/// [`shutdown`](Self::shutdown) once the server has stopped.
#[derive(Debug)]
pub struct CacheService {
    cache: ResponseCache,
    sweeper: SweepScheduler,
}

impl CacheService {
    /// Creates the cache and starts sweeping it. Must run inside a Tokio runtime.
    pub fn start(default_ttl: Duration, sweep_interval: Duration) -> Self {
        let cache = ResponseCache::new(default_ttl);
        let sweeper = SweepScheduler::start(cache.clone(), sweep_interval);
        Self { cache, sweeper }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::start(config.default_ttl(), config.sweep_interval())
    }

    /// Returns a handle sharing this service's store.
    pub fn cache(&self) -> ResponseCache {
        self.cache.clone()
    }

    /// Stops the sweep task and waits for it to finish.
    pub async fn shutdown(self) {
        self.sweeper.shutdown().await;
        info!("Cache service stopped");
    }
}
