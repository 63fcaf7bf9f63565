use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::waste::errors::WasteError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for WasteError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            WasteError::AmountTooSmall => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "waste.amount_too_small",
            ),
            WasteError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
