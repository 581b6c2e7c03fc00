use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Performance metrics for monitoring
#[derive(Clone)]
pub struct Metrics {
    pub assets_created: Arc<AtomicU64>,
    pub assets_deleted: Arc<AtomicU64>,
    pub list_requests: Arc<AtomicU64>,
    pub start_time: Instant,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            assets_created: Arc::new(AtomicU64::new(0)),
            assets_deleted: Arc::new(AtomicU64::new(0)),
            list_requests: Arc::new(AtomicU64::new(0)),
            start_time: Instant::now(),
        }
    }

    pub fn inc_assets_created(&self) {
        self.assets_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_assets_deleted(&self, count: u64) {
        self.assets_deleted.fetch_add(count, Ordering::Relaxed);
    }

    pub fn inc_list_requests(&self) {
        self.list_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            assets_created: self.assets_created.load(Ordering::Relaxed),
            assets_deleted: self.assets_deleted.load(Ordering::Relaxed),
            list_requests: self.list_requests.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
pub struct MetricsSnapshot {
    pub assets_created: u64,
    pub assets_deleted: u64,
    pub list_requests: u64,
    pub uptime_seconds: u64,
}
