use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::suggestion::errors::SuggestionError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for SuggestionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            SuggestionError::NoCheckIns => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ValidationError",
                "suggestion.no_check_ins",
            ),
            SuggestionError::ProviderFailed(_) => (
                StatusCode::BAD_GATEWAY,
                "UpstreamError",
                "suggestion.provider_failed",
            ),
            SuggestionError::InvalidOutput => (
                StatusCode::BAD_GATEWAY,
                "UpstreamError",
                "suggestion.invalid_output",
            ),
            SuggestionError::Repository(_) => (
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
    use business::domain::suggestion::errors::CompletionError;

    #[test]
    fn should_map_no_check_ins_to_unprocessable() {
        let (status, json) = SuggestionError::NoCheckIns.into_error_response();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json.0.message, "suggestion.no_check_ins");
    }

    #[test]
    fn should_map_provider_failures_to_bad_gateway() {
        let (status, _) =
            SuggestionError::ProviderFailed(CompletionError::Rejected { status: 429 })
                .into_error_response();
        assert_eq!(status, StatusCode::BAD_GATEWAY);

        let (status, _) = SuggestionError::InvalidOutput.into_error_response();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }
}
