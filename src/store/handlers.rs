use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    app_state::AppState,
    enrich::dtos::ErrorResponse,
    store::Collection,
};

#[derive(Serialize, ToSchema)]
pub struct CreatedResponse {
    pub key: String,
}

fn unknown_collection(slug: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("unknown collection '{slug}'"),
        }),
    )
        .into_response()
}

#[utoipa::path(
    get,
    path = "/v1/workspace/{collection}",
    tag = "workspace",
    responses(
        (status = 200, description = "Keys in the collection", body = [String]),
        (status = 404, description = "Unknown collection", body = ErrorResponse)
    )
)]
pub async fn list_collection(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Response {
    let Some(collection) = Collection::from_slug(&slug) else {
        return unknown_collection(&slug);
    };
    let mut keys = state.store.keys(collection).await;
    keys.sort();
    (StatusCode::OK, Json(keys)).into_response()
}

#[utoipa::path(
    post,
    path = "/v1/workspace/{collection}",
    tag = "workspace",
    responses(
        (status = 201, description = "Entry created under a generated key", body = CreatedResponse),
        (status = 404, description = "Unknown collection", body = ErrorResponse)
    )
)]
pub async fn create_entry(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(value): Json<Value>,
) -> Response {
    let Some(collection) = Collection::from_slug(&slug) else {
        return unknown_collection(&slug);
    };
    let key = Uuid::new_v4().to_string();
    state.store.set(collection, &key, value).await;
    (StatusCode::CREATED, Json(CreatedResponse { key })).into_response()
}

#[utoipa::path(
    get,
    path = "/v1/workspace/{collection}/{key}",
    tag = "workspace",
    responses(
        (status = 200, description = "Stored value, verbatim"),
        (status = 404, description = "Unknown collection or key", body = ErrorResponse)
    )
)]
pub async fn get_entry(
    State(state): State<AppState>,
    Path((slug, key)): Path<(String, String)>,
) -> Response {
    let Some(collection) = Collection::from_slug(&slug) else {
        return unknown_collection(&slug);
    };
    match state.store.get(collection, &key).await {
        Some(value) => (StatusCode::OK, Json(value)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("no entry '{key}' in {collection}"),
            }),
        )
            .into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/v1/workspace/{collection}/{key}",
    tag = "workspace",
    responses(
        (status = 204, description = "Value stored"),
        (status = 404, description = "Unknown collection", body = ErrorResponse)
    )
)]
pub async fn put_entry(
    State(state): State<AppState>,
    Path((slug, key)): Path<(String, String)>,
    Json(value): Json<Value>,
) -> Response {
    let Some(collection) = Collection::from_slug(&slug) else {
        return unknown_collection(&slug);
    };
    state.store.set(collection, &key, value).await;
    StatusCode::NO_CONTENT.into_response()
}

#[utoipa::path(
    delete,
    path = "/v1/workspace/{collection}/{key}",
    tag = "workspace",
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 404, description = "Unknown collection or key", body = ErrorResponse)
    )
)]
pub async fn delete_entry(
    State(state): State<AppState>,
    Path((slug, key)): Path<(String, String)>,
) -> Response {
    let Some(collection) = Collection::from_slug(&slug) else {
        return unknown_collection(&slug);
    };
    if state.store.delete(collection, &key).await {
        StatusCode::NO_CONTENT.into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("no entry '{key}' in {collection}"),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{enrich::fallback::FallbackProvider, store::MemoryStore};
    use axum::{
        Router,
        body::Body,
        http::Request,
        routing::{delete as delete_route, get, post, put as put_route},
    };
    use serde_json::json;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let state = AppState {
            provider: Arc::new(FallbackProvider::new()),
            store: Arc::new(MemoryStore::new()),
        };
        Router::new()
            .route("/v1/workspace/{collection}", get(list_collection))
            .route("/v1/workspace/{collection}", post(create_entry))
            .route("/v1/workspace/{collection}/{key}", get(get_entry))
            .route("/v1/workspace/{collection}/{key}", put_route(put_entry))
            .route(
                "/v1/workspace/{collection}/{key}",
                delete_route(delete_entry),
            )
            .with_state(state)
    }

    fn request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder().method(method).uri(uri);
        match body {
            Some(value) => builder
                .header("content-type", "application/json")
                .body(Body::from(value.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn put_then_get_returns_value_verbatim() {
        let app = test_app();
        let note = json!({"text": "met the founder at a conference"});

        let response = app
            .clone()
            .oneshot(request(
                "PUT",
                "/v1/workspace/notes/company-1",
                Some(note.clone()),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(request("GET", "/v1/workspace/notes/company-1", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, note);
    }

    #[tokio::test]
    async fn create_generates_a_key() {
        let app = test_app();
        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/v1/workspace/lists",
                Some(json!({"name": "AI infra"})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let created = body_json(response).await;
        let key = created["key"].as_str().unwrap().to_string();

        let response = app
            .oneshot(request("GET", &format!("/v1/workspace/lists/{key}"), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_collection_is_not_found() {
        let app = test_app();
        let response = app
            .oneshot(request("GET", "/v1/workspace/bookmarks/k", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_missing_entry_is_not_found() {
        let app = test_app();
        let response = app
            .oneshot(request("DELETE", "/v1/workspace/savedSearches/gone", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn list_returns_sorted_keys() {
        let app = test_app();
        for key in ["b", "a"] {
            let response = app
                .clone()
                .oneshot(request(
                    "PUT",
                    &format!("/v1/workspace/enrichmentCache/{key}"),
                    Some(json!({})),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::NO_CONTENT);
        }

        let response = app
            .oneshot(request("GET", "/v1/workspace/enrichmentCache", None))
            .await
            .unwrap();
        assert_eq!(body_json(response).await, json!(["a", "b"]));
    }
}
