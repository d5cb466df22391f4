use std::sync::{Arc, LazyLock};

use async_trait::async_trait;
use regex::Regex;

use crate::application::auth::session_store::VerificationSessionStore;
use crate::domain::auth::errors::IdentityError;
use crate::domain::auth::model::AuthSession;
use crate::domain::auth::services::IdentityProviderService;
use crate::domain::auth::use_cases::verify_code::{VerifyPhoneCodeParams, VerifyPhoneCodeUseCase};
use crate::domain::logger::Logger;

static CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{6}$").expect("code pattern compiles"));

pub struct VerifyPhoneCodeUseCaseImpl {
    pub provider: Arc<dyn IdentityProviderService>,
    pub sessions: Arc<VerificationSessionStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl VerifyPhoneCodeUseCase for VerifyPhoneCodeUseCaseImpl {
    async fn execute(&self, params: VerifyPhoneCodeParams) -> Result<AuthSession, IdentityError> {
        if !CODE_PATTERN.is_match(params.code.trim()) {
            return Err(IdentityError::InvalidVerificationCode);
        }

        let Some(verification) = self.sessions.get(params.request_id) else {
            self.logger.warn(&format!(
                "No live challenge for request {}",
                params.request_id
            ));
            return Err(IdentityError::VerificationExpired);
        };

        match self
            .provider
            .verify_phone_code(&verification, params.code.trim())
            .await
        {
            Ok(session) => {
                // A verified challenge is single-use.
                self.sessions.remove(params.request_id);
                self.logger
                    .info(&format!("Phone verified for uid {}", session.uid));
                Ok(session)
            }
            Err(IdentityError::VerificationExpired) => {
                self.sessions.remove(params.request_id);
                Err(IdentityError::VerificationExpired)
            }
            // A wrong code leaves the challenge live so the user may retry.
            Err(err) => {
                self.logger.warn(&format!("Verification rejected: {}", err));
                Err(err)
            }
        }
    }
}
