use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use service::errors::ServiceError;

fn status_for(e: &ServiceError) -> StatusCode {
    match e {
        ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        ServiceError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::Upstream(_) => StatusCode::BAD_GATEWAY,
        ServiceError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Message safe to hand to the client; server-side detail stays in the logs.
fn public_message(e: &ServiceError) -> String {
    match e {
        ServiceError::Validation(msg) => msg.clone(),
        ServiceError::NotFound(msg) => msg.clone(),
        ServiceError::Unauthorized(_) => "Unauthorized".into(),
        ServiceError::Upstream(_) => "Upstream service error".into(),
        ServiceError::Db(_) => "Internal server error".into(),
    }
}

/// Error in the `{success:false, error}` envelope of the form endpoints.
#[derive(Debug)]
pub struct FormError {
    status: StatusCode,
    message: String,
}

impl From<ServiceError> for FormError {
    fn from(e: ServiceError) -> Self {
        let status = status_for(&e);
        if status.is_server_error() {
            error!(error = %e, "request failed");
        }
        Self { status, message: public_message(&e) }
    }
}

impl IntoResponse for FormError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(serde_json::json!({ "success": false, "error": self.message })),
        )
            .into_response()
    }
}

/// Error in the flat `{error}` shape of the read-side API endpoints.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        let status = status_for(&e);
        if status.is_server_error() {
            error!(error = %e, "request failed");
        }
        Self { status, message: public_message(&e) }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({ "error": self.message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_is_deterministic() {
        assert_eq!(status_for(&ServiceError::Validation("x".into())), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(&ServiceError::Unauthorized("x".into())), StatusCode::UNAUTHORIZED);
        assert_eq!(status_for(&ServiceError::NotFound("x".into())), StatusCode::NOT_FOUND);
        assert_eq!(status_for(&ServiceError::Upstream("x".into())), StatusCode::BAD_GATEWAY);
        assert_eq!(status_for(&ServiceError::Db("x".into())), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn database_detail_is_not_leaked() {
        let msg = public_message(&ServiceError::Db("connection refused at 10.0.0.3".into()));
        assert_eq!(msg, "Internal server error");
    }
}
