use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::state::AppState;

const TOKEN_HEADER: &str = "x-revalidate-token";

#[derive(Debug, Deserialize)]
pub struct RevalidateQuery {
    #[serde(default)]
    pub path: Option<String>,
}

fn token_matches(state: &AppState, headers: &HeaderMap) -> bool {
    headers
        .get(TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|v| v == state.config.revalidate.token)
        .unwrap_or(false)
}

/// `POST /api/revalidate?path=` — drop one cached page. The token check runs
/// before anything else; a mismatch invalidates nothing.
pub async fn revalidate_path(
    State(state): State<AppState>,
    Query(query): Query<RevalidateQuery>,
    headers: HeaderMap,
) -> Response {
    if !token_matches(&state, &headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "Invalid token" })))
            .into_response();
    }
    let Some(path) = query.path.filter(|p| !p.trim().is_empty()) else {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "path is required" })))
            .into_response();
    };
    state.page_cache.invalidate(&path).await;
    info!(path = %path, "page cache invalidated");
    Json(json!({ "revalidated": true, "path": path })).into_response()
}

/// `POST /api/revalidate-all` — drop every cached page.
pub async fn revalidate_all(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if !token_matches(&state, &headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "Invalid token" })))
            .into_response();
    }
    state.page_cache.invalidate_all();
    info!("page cache fully invalidated");
    Json(json!({ "revalidated": true })).into_response()
}
