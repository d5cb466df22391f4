use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Opaque provider session returned on successful sign-in, registration or
/// phone verification.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSession {
    pub uid: String,
    pub id_token: String,
    pub refresh_token: String,
    pub expires_in_secs: u64,
}

/// One active phone-verification challenge, alive between the "send code"
/// and "verify code" steps. Owned by the auth component and resumed by
/// `request_id`; never stashed in ambient global state.
#[derive(Debug, Clone, PartialEq)]
pub struct PhoneVerification {
    pub request_id: Uuid,
    pub phone_number: String,
    /// Provider token tying the code that was sent to this challenge.
    pub session_info: String,
    pub issued_at: DateTime<Utc>,
}

impl PhoneVerification {
    pub fn new(phone_number: String, session_info: String) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            phone_number,
            session_info,
            issued_at: Utc::now(),
        }
    }
}
