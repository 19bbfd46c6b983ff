use std::sync::Arc;

use crate::config::AppConfig;
use crate::database::Database;

/// Shared application state cloned into every handler.
///
/// The pool and configuration are constructed once in `main` and injected
/// here rather than living in process-wide statics, so their lifecycle is
/// owned by the caller (opened at startup, closed at shutdown).
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(db: Database, config: AppConfig) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}
