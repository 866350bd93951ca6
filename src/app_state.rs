use crate::config::Config;
use crate::enrich::provider::{self, EnrichmentProvider};
use crate::store::{MemoryStore, WorkspaceStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn EnrichmentProvider + Send + Sync>,
    pub store: Arc<dyn WorkspaceStore + Send + Sync>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            provider: provider::from_config(config),
            store: Arc::new(MemoryStore::new()),
        }
    }
}
