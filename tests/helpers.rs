use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use vcscout::{
    app_state::AppState,
    enrich::{handlers::enrich, provider::EnrichmentProvider},
    health::health_check,
    store::MemoryStore,
};

pub fn test_app(provider: Arc<dyn EnrichmentProvider + Send + Sync>) -> Router {
    let state = AppState {
        provider,
        store: Arc::new(MemoryStore::new()),
    };

    Router::new()
        .route("/healthz", get(health_check))
        .route("/v1/enrich", post(enrich))
        .with_state(state)
}
