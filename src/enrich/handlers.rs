use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::{
    app_state::AppState,
    enrich::dtos::{EnrichRequest, EnrichmentResult, ErrorResponse},
};

#[utoipa::path(
    post,
    path = "/v1/enrich",
    tag = "enrich",
    request_body = EnrichRequest,
    responses(
        (status = 200, description = "Enrichment succeeded", body = EnrichmentResult),
        (status = 400, description = "Missing or blank domain", body = ErrorResponse),
        (status = 422, description = "No pages could be fetched", body = ErrorResponse),
        (status = 500, description = "Completion or parse failure", body = ErrorResponse)
    )
)]
pub async fn enrich(State(state): State<AppState>, Json(payload): Json<EnrichRequest>) -> Response {
    let domain = match payload.validate() {
        Ok(domain) => domain,
        Err(error) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response();
        }
    };

    match state.provider.enrich(domain).await {
        Ok(result) => {
            info!(domain = %domain, sources = result.sources.len(), "enrichment complete");
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(err) => err.into_response(),
    }
}
