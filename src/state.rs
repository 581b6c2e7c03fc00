use std::sync::Arc;

use crate::config::AppConfig;
use crate::metrics::Metrics;

/// The shared application state.
///
/// This struct holds all the core shared data structures that need to be accessed
/// across different parts of the application, including HTTP handlers, middleware,
/// and background tasks. It's designed to be thread-safe and cloneable for use
/// with Axum's request extraction system.
#[derive(Clone)]
pub struct AppState {
    /// The database connection pool.
    ///
    /// Provides connections to the SQLite database backing the four asset-pool
    /// tables.
    pub db: sqlx::SqlitePool,
    /// The application configuration.
    ///
    /// Contains server settings, database configuration and other runtime
    /// parameters.
    pub config: Arc<AppConfig>,
    /// The application metrics.
    ///
    /// Tracks counters for created and deleted assets and pool listings.
    pub metrics: Metrics,
}

impl AppState {
    /// Creates a new `AppState` with initialized components.
    pub fn new(db: sqlx::SqlitePool, config: AppConfig) -> Self {
        Self { db, config: Arc::new(config), metrics: Metrics::new() }
    }
}
