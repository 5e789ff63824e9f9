use std::sync::Arc;

use crate::config::ServerConfig;
use crate::media::catalog::Catalog;

/// Shared application state injected into all route handlers via axum::extract::State.
/// Built once at startup and never mutated, so no locking is needed.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let catalog = Catalog::new(config.watched_dir.clone(), config.base_url());
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
        }
    }
}
