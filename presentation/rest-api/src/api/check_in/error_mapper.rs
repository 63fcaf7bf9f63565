use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::check_in::errors::CheckInError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CheckInError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CheckInError::NameInvalid => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "check_in.name_invalid",
            ),
            CheckInError::EmailInvalid => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "check_in.email_invalid",
            ),
            CheckInError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "check_in.not_found"),
            CheckInError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_validation_errors_to_bad_request() {
        let (status, json) = CheckInError::EmailInvalid.into_error_response();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.message, "check_in.email_invalid");
    }

    #[test]
    fn should_map_not_found() {
        let (status, _) = CheckInError::NotFound.into_error_response();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_hide_repository_details() {
        let (status, json) =
            CheckInError::Repository(RepositoryError::DatabaseError).into_error_response();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.name, "InternalError");
    }
}
