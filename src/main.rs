use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info;

use vcscout::{app_state::AppState, config::Config, enrich, health, store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    let state = AppState::new(&config);
    info!(provider = %state.provider.mode(), "enrichment provider selected");

    let app = Router::new()
        .route("/healthz", get(health::health_check))
        .route("/v1/enrich", post(enrich::handlers::enrich))
        .route("/v1/workspace/{collection}", get(store::handlers::list_collection))
        .route("/v1/workspace/{collection}", post(store::handlers::create_entry))
        .route("/v1/workspace/{collection}/{key}", get(store::handlers::get_entry))
        .route("/v1/workspace/{collection}/{key}", put(store::handlers::put_entry))
        .route("/v1/workspace/{collection}/{key}", delete(store::handlers::delete_entry))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(addr = %config.bind_addr(), "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
