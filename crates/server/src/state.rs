use axum::extract::FromRef;
use shared_types::ServiceConfig;
use std::sync::Arc;
use std::time::Duration;

use crate::store::{LinkStore, MemoryLinkStore};

/// How often expired links are dropped from the store.
pub const PURGE_INTERVAL: Duration = Duration::from_secs(60);

/// Shared application state passed to Axum handlers via `State`.
/// Derives `FromRef` so handlers can extract just the store or the config.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub store: Arc<dyn LinkStore>,
    pub config: Arc<ServiceConfig>,
}

impl AppState {
    /// State backed by an in-memory store sized by `config.count`.
    pub fn in_memory(config: ServiceConfig) -> Self {
        Self {
            store: Arc::new(MemoryLinkStore::new(config.count)),
            config: Arc::new(config),
        }
    }
}

/// Spawn the background task that purges expired links every
/// [`PURGE_INTERVAL`]. Must be called from within a Tokio runtime.
pub fn spawn_purge_task(state: &AppState) -> tokio::task::JoinHandle<()> {
    let store = state.store.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(PURGE_INTERVAL);
        loop {
            interval.tick().await;
            match store.purge_expired() {
                Ok(0) => {}
                Ok(removed) => tracing::debug!(removed, "Purged expired short links"),
                Err(e) => tracing::error!(error = %e, "Failed to purge expired short links"),
            }
        }
    })
}
