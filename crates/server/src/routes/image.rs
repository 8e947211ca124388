use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use service::image::{object_etag, IMMUTABLE_CACHE_CONTROL};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ImageQuery {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub bucket: Option<String>,
}

fn error_json(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// `GET /api/image?path=&bucket=` — conditional-GET proxy in front of object
/// storage. The ETag depends only on the object identity, so a matching
/// `If-None-Match` short-circuits before any upstream fetch.
pub async fn proxy_image(
    State(state): State<AppState>,
    Query(query): Query<ImageQuery>,
    headers: HeaderMap,
) -> Response {
    let Some(path) = query.path.filter(|p| !p.trim().is_empty()) else {
        return error_json(StatusCode::BAD_REQUEST, "path is required");
    };
    let bucket = query
        .bucket
        .filter(|b| !b.trim().is_empty())
        .unwrap_or_else(|| state.config.storage.content_bucket.clone());

    let etag = object_etag(&bucket, &path);
    let if_none_match = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok());
    if if_none_match == Some(etag.as_str()) {
        return match Response::builder()
            .status(StatusCode::NOT_MODIFIED)
            .header(header::ETAG, &etag)
            .body(Body::empty())
        {
            Ok(res) => res,
            Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        };
    }

    let object = match state.storage.download(&bucket, &path).await {
        Ok(object) => object,
        Err(e) => {
            warn!(bucket = %bucket, path = %path, error = %e, "image fetch failed");
            return error_json(StatusCode::NOT_FOUND, "Image not found");
        }
    };

    match Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, object.content_type)
        .header(header::CACHE_CONTROL, IMMUTABLE_CACHE_CONTROL)
        .header(header::ETAG, &etag)
        .header(header::ACCEPT_RANGES, "bytes")
        .header("x-content-type-options", "nosniff")
        .body(Body::from(object.bytes))
    {
        Ok(res) => res,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
