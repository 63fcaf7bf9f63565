use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::dish_waste::errors::DishWasteError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for DishWasteError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            DishWasteError::NothingToLog => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "dish_waste.nothing_to_log",
            ),
            DishWasteError::NotOnMenu(_) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "dish_waste.not_on_menu",
            ),
            DishWasteError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
