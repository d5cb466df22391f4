use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use business::domain::auth::errors::IdentityError;
use business::domain::auth::model::{AuthSession, PhoneVerification};
use business::domain::auth::services::IdentityProviderService;

use crate::client::FirebaseAuthClient;

pub struct IdentityProviderFirebase {
    client: FirebaseAuthClient,
}

impl IdentityProviderFirebase {
    pub fn new(client: FirebaseAuthClient) -> Self {
        Self { client }
    }

    /// Translates a provider code string into the closed error set. Codes
    /// sometimes arrive with a trailing explanation
    /// ("TOO_MANY_ATTEMPTS_TRY_LATER : ..."), so only the leading token is
    /// matched. Anything unrecognized keeps its raw code for diagnosis.
    fn map_error_code(code: &str) -> IdentityError {
        let token = code
            .split([':', ' '])
            .next()
            .unwrap_or(code)
            .trim();

        match token {
            "EMAIL_NOT_FOUND" | "USER_NOT_FOUND" => IdentityError::UserNotFound,
            "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => IdentityError::WrongPassword,
            "EMAIL_EXISTS" => IdentityError::EmailInUse,
            "INVALID_EMAIL" | "MISSING_EMAIL" => IdentityError::InvalidEmail,
            "WEAK_PASSWORD" | "MISSING_PASSWORD" => IdentityError::WeakPassword,
            "INVALID_PHONE_NUMBER" | "MISSING_PHONE_NUMBER" => IdentityError::InvalidPhoneNumber,
            "INVALID_CODE" | "MISSING_CODE" => IdentityError::InvalidVerificationCode,
            "SESSION_EXPIRED" => IdentityError::VerificationExpired,
            "TOO_MANY_ATTEMPTS_TRY_LATER" | "QUOTA_EXCEEDED" => IdentityError::TooManyAttempts,
            _ => IdentityError::Unknown(token.to_string()),
        }
    }

    fn extract_error_code(body: &serde_json::Value) -> Option<&str> {
        body["error"]["message"].as_str()
    }

    async fn post(
        &self,
        action: &str,
        body: serde_json::Value,
    ) -> Result<serde_json::Value, IdentityError> {
        let response = self
            .client
            .client
            .post(self.client.accounts_url(action))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|_| IdentityError::ProviderUnreachable)?;

        let status = response.status();
        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|_| IdentityError::ProviderUnreachable)?;

        if !status.is_success() {
            return Err(match Self::extract_error_code(&data) {
                Some(code) => Self::map_error_code(code),
                None => IdentityError::ProviderUnreachable,
            });
        }

        Ok(data)
    }

    fn parse_session(data: serde_json::Value) -> Result<AuthSession, IdentityError> {
        let payload: SessionPayload = serde_json::from_value(data)
            .map_err(|_| IdentityError::ProviderUnreachable)?;

        Ok(AuthSession {
            uid: payload.local_id,
            id_token: payload.id_token,
            refresh_token: payload.refresh_token,
            expires_in_secs: payload.expires_in.parse().unwrap_or(3600),
        })
    }
}

/// The provider reports `expiresIn` as a decimal string.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionPayload {
    local_id: String,
    id_token: String,
    refresh_token: String,
    expires_in: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendCodePayload {
    session_info: String,
}

#[async_trait]
impl IdentityProviderService for IdentityProviderFirebase {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, IdentityError> {
        let data = self
            .post(
                "signInWithPassword",
                json!({
                    "email": email,
                    "password": password,
                    "returnSecureToken": true,
                }),
            )
            .await?;

        Self::parse_session(data)
    }

    async fn register(&self, email: &str, password: &str) -> Result<AuthSession, IdentityError> {
        let data = self
            .post(
                "signUp",
                json!({
                    "email": email,
                    "password": password,
                    "returnSecureToken": true,
                }),
            )
            .await?;

        Self::parse_session(data)
    }

    async fn send_phone_code(
        &self,
        phone_number: &str,
        recaptcha_token: &str,
    ) -> Result<PhoneVerification, IdentityError> {
        let data = self
            .post(
                "sendVerificationCode",
                json!({
                    "phoneNumber": phone_number,
                    "recaptchaToken": recaptcha_token,
                }),
            )
            .await?;

        let payload: SendCodePayload = serde_json::from_value(data)
            .map_err(|_| IdentityError::ProviderUnreachable)?;

        Ok(PhoneVerification::new(
            phone_number.to_string(),
            payload.session_info,
        ))
    }

    async fn verify_phone_code(
        &self,
        verification: &PhoneVerification,
        code: &str,
    ) -> Result<AuthSession, IdentityError> {
        let data = self
            .post(
                "signInWithPhoneNumber",
                json!({
                    "sessionInfo": verification.session_info,
                    "code": code,
                }),
            )
            .await?;

        Self::parse_session(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_each_known_provider_code_to_its_variant() {
        let cases = [
            ("EMAIL_NOT_FOUND", IdentityError::UserNotFound),
            ("INVALID_PASSWORD", IdentityError::WrongPassword),
            ("INVALID_LOGIN_CREDENTIALS", IdentityError::WrongPassword),
            ("EMAIL_EXISTS", IdentityError::EmailInUse),
            ("INVALID_EMAIL", IdentityError::InvalidEmail),
            ("WEAK_PASSWORD", IdentityError::WeakPassword),
            ("INVALID_PHONE_NUMBER", IdentityError::InvalidPhoneNumber),
            ("INVALID_CODE", IdentityError::InvalidVerificationCode),
            ("SESSION_EXPIRED", IdentityError::VerificationExpired),
            (
                "TOO_MANY_ATTEMPTS_TRY_LATER",
                IdentityError::TooManyAttempts,
            ),
        ];

        for (code, expected) in cases {
            assert_eq!(IdentityProviderFirebase::map_error_code(code), expected);
        }
    }

    #[test]
    fn should_strip_trailing_explanations_from_codes() {
        assert_eq!(
            IdentityProviderFirebase::map_error_code(
                "TOO_MANY_ATTEMPTS_TRY_LATER : Try again later."
            ),
            IdentityError::TooManyAttempts
        );
        assert_eq!(
            IdentityProviderFirebase::map_error_code(
                "WEAK_PASSWORD : Password should be at least 6 characters"
            ),
            IdentityError::WeakPassword
        );
    }

    #[test]
    fn should_keep_the_raw_code_for_unknown_failures() {
        assert_eq!(
            IdentityProviderFirebase::map_error_code("OPERATION_NOT_ALLOWED"),
            IdentityError::Unknown("OPERATION_NOT_ALLOWED".to_string())
        );
    }

    #[test]
    fn should_extract_the_code_from_a_provider_error_body() {
        let body = serde_json::json!({
            "error": {"code": 400, "message": "EMAIL_NOT_FOUND", "errors": []}
        });

        assert_eq!(
            IdentityProviderFirebase::extract_error_code(&body),
            Some("EMAIL_NOT_FOUND")
        );
        assert_eq!(
            IdentityProviderFirebase::extract_error_code(&serde_json::json!({})),
            None
        );
    }

    #[test]
    fn should_parse_a_session_payload() {
        let data = serde_json::json!({
            "localId": "uid-9",
            "idToken": "id-token",
            "refreshToken": "refresh-token",
            "expiresIn": "3600",
            "email": "guest@halaq.sa",
        });

        let session = IdentityProviderFirebase::parse_session(data).unwrap();

        assert_eq!(session.uid, "uid-9");
        assert_eq!(session.expires_in_secs, 3600);
    }

    #[test]
    fn should_fail_on_incomplete_session_payload() {
        let data = serde_json::json!({"localId": "uid-9"});

        assert!(IdentityProviderFirebase::parse_session(data).is_err());
    }
}
