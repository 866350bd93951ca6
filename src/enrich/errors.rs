use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::enrich::dtos::ErrorResponse;

/// Every failure mode is terminal for the current invocation; nothing is
/// retried internally. The messages below are the wire-visible error bodies.
#[derive(Error, Debug)]
pub enum EnrichError {
    #[error("domain is required")]
    MissingDomain,

    #[error(
        "Could not fetch any pages from {domain}. The site may block scrapers or require authentication."
    )]
    NoPagesFetched { domain: String },

    /// The completion call itself failed (network, auth, quota). Carries the
    /// upstream message when one is available.
    #[error("{0}")]
    Completion(String),

    #[error("Failed to parse AI response. Try again.")]
    UnparseableResponse,
}

impl EnrichError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingDomain => StatusCode::BAD_REQUEST,
            Self::NoPagesFetched { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Completion(_) | Self::UnparseableResponse => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for EnrichError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
