/// Closed set of identity-provider failures, produced by the provider
/// adapter at the boundary and matched exhaustively by the presentation
/// layer. `Unknown` carries the raw provider code for diagnosis.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("auth.user_not_found")]
    UserNotFound,
    #[error("auth.wrong_password")]
    WrongPassword,
    #[error("auth.email_in_use")]
    EmailInUse,
    #[error("auth.invalid_email")]
    InvalidEmail,
    #[error("auth.weak_password")]
    WeakPassword,
    #[error("auth.invalid_phone_number")]
    InvalidPhoneNumber,
    #[error("auth.invalid_verification_code")]
    InvalidVerificationCode,
    #[error("auth.verification_expired")]
    VerificationExpired,
    #[error("auth.too_many_attempts")]
    TooManyAttempts,
    #[error("auth.provider_unreachable")]
    ProviderUnreachable,
    #[error("auth.unknown: {0}")]
    Unknown(String),
}
