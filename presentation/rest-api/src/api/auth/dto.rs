use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::auth::model::{AuthSession, PhoneVerification};

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct SendCodeRequest {
    /// E.164 formatted phone number, e.g. "+966501234567"
    pub phone_number: String,
    /// Human-verification token obtained by the client
    pub recaptcha_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct VerifyCodeRequest {
    /// Challenge id returned by the send-code step
    pub request_id: Uuid,
    /// Six-digit code received by SMS
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct SessionResponse {
    /// Provider user id
    pub uid: String,
    /// Short-lived identity token
    pub id_token: String,
    /// Token for renewing the session
    pub refresh_token: String,
    /// Identity token lifetime in seconds
    pub expires_in_secs: u64,
}

impl From<AuthSession> for SessionResponse {
    fn from(s: AuthSession) -> Self {
        Self {
            uid: s.uid,
            id_token: s.id_token,
            refresh_token: s.refresh_token,
            expires_in_secs: s.expires_in_secs,
        }
    }
}

/// The provider's session token stays server-side; the client only gets the
/// challenge id to quote back.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct VerificationResponse {
    pub request_id: Uuid,
    pub phone_number: String,
    pub issued_at: DateTime<Utc>,
}

impl From<PhoneVerification> for VerificationResponse {
    fn from(v: PhoneVerification) -> Self {
        Self {
            request_id: v.request_id,
            phone_number: v.phone_number,
            issued_at: v.issued_at,
        }
    }
}

/// Credential failures carry both the stable code (for clients) and a
/// locale-appropriate message (for direct display).
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct AuthErrorResponse {
    pub name: String,
    pub code: String,
    pub message: String,
}
