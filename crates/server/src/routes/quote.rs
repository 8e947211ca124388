use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use models::teklif::{self, NewTeklif};
use service::{errors::ServiceError, notify};

use crate::errors::FormError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub service_type: String,
    pub from_address: String,
    pub to_address: String,
    pub move_date: String,
    #[serde(default)]
    pub notes: Option<String>,
}

fn require(field: &str, value: &str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        return Err(ServiceError::Validation(format!("{} is required", field)).into());
    }
    Ok(())
}

/// `POST /api/teklif` — persist a quote request and attempt exactly one
/// notification dispatch. Dispatch failures never fail the response.
pub async fn create_quote(
    State(state): State<AppState>,
    Json(input): Json<QuoteRequest>,
) -> Result<Json<Value>, FormError> {
    require("firstName", &input.first_name)?;
    require("lastName", &input.last_name)?;
    require("email", &input.email)?;
    require("phone", &input.phone)?;
    require("serviceType", &input.service_type)?;
    require("fromAddress", &input.from_address)?;
    require("toAddress", &input.to_address)?;
    require("moveDate", &input.move_date)?;

    let created = teklif::create(
        &state.db,
        NewTeklif {
            ad: input.first_name,
            soyad: input.last_name,
            email: input.email,
            telefon: input.phone,
            hizmet_turu: input.service_type,
            nereden_adres: input.from_address,
            nereye_adres: input.to_address,
            tasinma_tarihi: input.move_date,
            notlar: input.notes,
        },
    )
    .await
    .map_err(ServiceError::from)?;

    let text = notify::quote_message(&created);
    notify::dispatch(&state.db, state.bot.as_ref(), &text).await;

    Ok(Json(json!({ "success": true, "data": created })))
}
