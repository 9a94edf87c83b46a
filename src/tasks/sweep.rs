//! Cache Sweep Task
//!
//! Background task that periodically reclaims expired response-cache entries.
//! Lookups already hide expired entries; the sweep only bounds memory held by
//! entries that are written once and never read again.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::cache::ResponseCache;

/// Handle to the running sweep task.
///
/// Dropping the handle without calling [`shutdown`](Self::shutdown) also
/// stops the task at its next wake-up.
#[derive(Debug)]
pub struct SweepScheduler {
    shutdown_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl SweepScheduler {
    /// Spawns the sweep loop on the current Tokio runtime.
    ///
    /// The first sweep happens one full `interval` after start. A zero
    /// interval is treated as one millisecond.
    ///
    /// # Example
    /// ```ignore
    /// let cache = ResponseCache::default();
    /// let sweeper = SweepScheduler::start(cache.clone(), Duration::from_secs(300));
    /// // Later, during shutdown:
    /// sweeper.shutdown().await;
    /// ```
    pub fn start(cache: ResponseCache, interval: Duration) -> Self {
        let interval = interval.max(Duration::from_millis(1));
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            info!(
                interval_ms = interval.as_millis() as u64,
                "Starting cache sweep task"
            );

            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // First tick completes immediately
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let removed = cache.sweep().await;
                        if removed > 0 {
                            info!(removed, "Cache sweep: removed expired entries");
                        } else {
                            debug!("Cache sweep: no expired entries found");
                        }
                    }
                    // Fires on shutdown() or when the handle is dropped
                    _ = shutdown_rx.changed() => break,
                }
            }

            info!("Cache sweep task stopped");
        });

        Self {
            shutdown_tx,
            handle,
        }
    }

    /// Signals the task to stop and waits for it to exit.
    pub async fn shutdown(self) {
        // Err only means the task is already gone
        let _ = self.shutdown_tx.send(true);
        if let Err(e) = self.handle.await {
            warn!(error = %e, "Cache sweep task ended abnormally");
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CacheKey, CachedResponse};

    fn payload() -> CachedResponse {
        CachedResponse::new("value", None)
    }

    #[tokio::test]
    async fn test_sweep_task_removes_expired_entries() {
        let cache = ResponseCache::default();
        let key = CacheKey::from_parts("/expire_soon", None);
        cache.set(&key, payload(), Some(Duration::ZERO)).await;
        assert_eq!(cache.len().await, 1);

        let sweeper = SweepScheduler::start(cache.clone(), Duration::from_millis(20));

        tokio::time::sleep(Duration::from_millis(100)).await;

        // Removed physically, without any lookup
        assert_eq!(cache.len().await, 0);
        assert_eq!(cache.stats().await.expirations, 1);

        sweeper.shutdown().await;
    }

    #[tokio::test]
    async fn test_sweep_task_preserves_valid_entries() {
        let cache = ResponseCache::default();
        let key = CacheKey::from_parts("/long_lived", None);
        cache
            .set(&key, payload(), Some(Duration::from_secs(3600)))
            .await;

        let sweeper = SweepScheduler::start(cache.clone(), Duration::from_millis(20));

        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(cache.get(&key).await, Some(payload()));

        sweeper.shutdown().await;
    }

    #[tokio::test]
    async fn test_sweep_task_waits_one_interval_before_first_sweep() {
        let cache = ResponseCache::default();
        let key = CacheKey::from_parts("/a", None);
        cache.set(&key, payload(), Some(Duration::ZERO)).await;

        let sweeper = SweepScheduler::start(cache.clone(), Duration::from_secs(3600));
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(cache.len().await, 1);

        sweeper.shutdown().await;
    }

    #[tokio::test]
    async fn test_shutdown_stops_task() {
        let cache = ResponseCache::default();
        let sweeper = SweepScheduler::start(cache, Duration::from_secs(3600));

        assert!(!sweeper.is_finished());

        tokio::time::timeout(Duration::from_secs(1), sweeper.shutdown())
            .await
            .expect("shutdown should complete promptly");
    }

    #[tokio::test]
    async fn test_zero_interval_does_not_panic() {
        let cache = ResponseCache::default();
        let sweeper = SweepScheduler::start(cache, Duration::ZERO);

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(!sweeper.is_finished());

        sweeper.shutdown().await;
    }
}
