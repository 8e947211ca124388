use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use models::gallery_item;
use service::errors::ServiceError;
use service::gallery::{self, IngestOutcome, TelegramUpdate};

use crate::errors::ApiError;
use crate::state::AppState;

/// `GET /api/gallery` — ordered gallery rows.
pub async fn list_gallery(
    State(state): State<AppState>,
) -> Result<Json<Vec<gallery_item::Model>>, ApiError> {
    let items = gallery_item::list_ordered(&state.db)
        .await
        .map_err(ServiceError::from)?;
    Ok(Json(items))
}

/// `POST /api/telegram/gallery` — webhook the bot platform delivers photo
/// messages to. A payload without a photo is answered, not processed.
pub async fn telegram_webhook(
    State(state): State<AppState>,
    Json(update): Json<TelegramUpdate>,
) -> Response {
    let bucket = state.config.storage.gallery_bucket.clone();
    match gallery::ingest(&state.db, &state.storage, state.bot.as_ref(), &bucket, &update).await
    {
        Ok(IngestOutcome::NoPhoto) => {
            Json(json!({ "success": false, "error": "No photo in message" })).into_response()
        }
        Ok(IngestOutcome::Stored(item)) => {
            Json(json!({ "success": true, "data": item })).into_response()
        }
        Err(e) => {
            error!(update_id = update.update_id, error = %e, "gallery ingest failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": "Internal server error" })),
            )
                .into_response()
        }
    }
}
