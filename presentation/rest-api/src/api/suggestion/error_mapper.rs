use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::suggestion::errors::SuggestionError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for SuggestionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            SuggestionError::EmptySelection => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "suggestion.empty_selection",
            ),
            SuggestionError::FetchFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "SuggestionError",
                "suggestion.fetch_failed",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
