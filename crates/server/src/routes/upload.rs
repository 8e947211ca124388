use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{header, HeaderMap};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use service::errors::ServiceError;

use crate::errors::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UploadQuery {
    #[serde(default)]
    pub filename: Option<String>,
}

/// `POST /api/admin/upload` — store a rich-text-editor image in the content
/// bucket and return its public location. Admin-gated by the middleware.
pub async fn upload_image(
    State(state): State<AppState>,
    Query(query): Query<UploadQuery>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    if body.is_empty() {
        return Err(ServiceError::Validation("empty upload body".into()).into());
    }
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/octet-stream")
        .to_string();
    let extension = query
        .filename
        .as_deref()
        .and_then(|f| f.rsplit_once('.'))
        .map(|(_, ext)| format!(".{}", ext.to_lowercase()))
        .unwrap_or_default();
    let object_path = format!("editor/{}{}", Uuid::new_v4(), extension);

    let bucket = &state.config.storage.content_bucket;
    state
        .storage
        .upload(bucket, &object_path, body.to_vec(), &content_type)
        .await?;

    Ok(Json(json!({ "location": state.storage.public_url(bucket, &object_path) })))
}
