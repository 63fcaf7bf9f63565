use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::menu::errors::MenuError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for MenuError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            MenuError::EmptySelection => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "menu.empty_selection",
            ),
            MenuError::UnknownDish(_) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "menu.unknown_dish",
            ),
            MenuError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
