use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use models::iletisim;
use service::{errors::ServiceError, notify};

use crate::errors::FormError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// `POST /api/contact` — persist a contact message and notify once.
pub async fn create_message(
    State(state): State<AppState>,
    Json(input): Json<ContactRequest>,
) -> Result<Json<Value>, FormError> {
    for (field, value) in [
        ("name", &input.name),
        ("email", &input.email),
        ("phone", &input.phone),
        ("message", &input.message),
    ] {
        if value.trim().is_empty() {
            return Err(ServiceError::Validation(format!("{} is required", field)).into());
        }
    }

    let created =
        iletisim::create(&state.db, &input.name, &input.email, &input.phone, &input.message)
            .await
            .map_err(ServiceError::from)?;

    let text = notify::contact_message(&created);
    notify::dispatch(&state.db, state.bot.as_ref(), &text).await;

    Ok(Json(json!({ "success": true, "data": created })))
}
