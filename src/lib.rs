pub mod config;
pub mod rest;
pub mod storage;
pub mod tasks;

use std::sync::Arc;

use config::TaskdConfig;
use storage::Storage;

/// Shared application state passed to every request handler.
///
/// Constructed once in `main` and injected into the router; the SQLite pool
/// inside `storage` is the only durable state shared between requests.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<TaskdConfig>,
    pub storage: Arc<Storage>,
    pub started_at: std::time::Instant,
}
