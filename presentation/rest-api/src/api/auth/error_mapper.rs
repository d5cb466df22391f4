use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::auth::errors::IdentityError;
use business::domain::shared::value_objects::Locale;

use crate::api::auth::dto::AuthErrorResponse;
use crate::i18n::messages::credential_message;

/// Maps a credential failure to HTTP parts plus the localized body. Matched
/// exhaustively so a new variant cannot ship without a mapping.
pub fn into_auth_error_response(
    error: IdentityError,
    locale: Locale,
) -> (StatusCode, Json<AuthErrorResponse>) {
    let (status, name) = match &error {
        IdentityError::UserNotFound | IdentityError::WrongPassword => {
            (StatusCode::UNAUTHORIZED, "AuthenticationError")
        }
        IdentityError::EmailInUse => (StatusCode::CONFLICT, "ConflictError"),
        IdentityError::InvalidEmail
        | IdentityError::WeakPassword
        | IdentityError::InvalidPhoneNumber
        | IdentityError::InvalidVerificationCode
        | IdentityError::VerificationExpired => (StatusCode::BAD_REQUEST, "ValidationError"),
        IdentityError::TooManyAttempts => (StatusCode::TOO_MANY_REQUESTS, "RateLimitError"),
        IdentityError::ProviderUnreachable | IdentityError::Unknown(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
        }
    };

    let message = credential_message(locale, &error);
    (
        status,
        Json(AuthErrorResponse {
            name: name.to_string(),
            code: error.to_string(),
            message,
        }),
    )
}
