use std::sync::{Arc, LazyLock};

use async_trait::async_trait;
use regex::Regex;

use crate::application::auth::session_store::VerificationSessionStore;
use crate::domain::auth::errors::IdentityError;
use crate::domain::auth::model::PhoneVerification;
use crate::domain::auth::services::IdentityProviderService;
use crate::domain::auth::use_cases::send_code::{SendPhoneCodeParams, SendPhoneCodeUseCase};
use crate::domain::logger::Logger;

/// E.164: leading +, 8 to 15 digits, no leading zero.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+[1-9]\d{7,14}$").expect("phone pattern compiles"));

pub struct SendPhoneCodeUseCaseImpl {
    pub provider: Arc<dyn IdentityProviderService>,
    pub sessions: Arc<VerificationSessionStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SendPhoneCodeUseCase for SendPhoneCodeUseCaseImpl {
    async fn execute(
        &self,
        params: SendPhoneCodeParams,
    ) -> Result<PhoneVerification, IdentityError> {
        let phone = params.phone_number.trim();
        if !PHONE_PATTERN.is_match(phone) {
            self.logger.warn("Rejected phone number: not E.164");
            return Err(IdentityError::InvalidPhoneNumber);
        }

        self.logger.info("Issuing phone verification challenge");
        let verification = self
            .provider
            .send_phone_code(phone, &params.recaptcha_token)
            .await?;

        self.sessions.insert(verification.clone());
        self.logger.info(&format!(
            "Challenge {} issued, awaiting code",
            verification.request_id
        ));
        Ok(verification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::model::AuthSession;
    use mockall::mock;

    mock! {
        pub Provider {}

        #[async_trait]
        impl IdentityProviderService for Provider {
            async fn sign_in(
                &self,
                email: &str,
                password: &str,
            ) -> Result<AuthSession, IdentityError>;
            async fn register(
                &self,
                email: &str,
                password: &str,
            ) -> Result<AuthSession, IdentityError>;
            async fn send_phone_code(
                &self,
                phone_number: &str,
                recaptcha_token: &str,
            ) -> Result<PhoneVerification, IdentityError>;
            async fn verify_phone_code(
                &self,
                verification: &PhoneVerification,
                code: &str,
            ) -> Result<AuthSession, IdentityError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_store_the_challenge_for_later_verification() {
        let mut provider = MockProvider::new();
        provider.expect_send_phone_code().returning(|phone, _| {
            Ok(PhoneVerification::new(
                phone.to_string(),
                "session-token".to_string(),
            ))
        });

        let sessions = Arc::new(VerificationSessionStore::new());
        let use_case = SendPhoneCodeUseCaseImpl {
            provider: Arc::new(provider),
            sessions: sessions.clone(),
            logger: mock_logger(),
        };

        let verification = use_case
            .execute(SendPhoneCodeParams {
                phone_number: "+966501234567".to_string(),
                recaptcha_token: "captcha-ok".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(sessions.get(verification.request_id), Some(verification));
    }

    #[tokio::test]
    async fn should_reject_malformed_phone_numbers_before_calling_provider() {
        let provider = MockProvider::new();
        let use_case = SendPhoneCodeUseCaseImpl {
            provider: Arc::new(provider),
            sessions: Arc::new(VerificationSessionStore::new()),
            logger: mock_logger(),
        };

        for phone in ["0501234567", "+0123", "not-a-phone", ""] {
            let result = use_case
                .execute(SendPhoneCodeParams {
                    phone_number: phone.to_string(),
                    recaptcha_token: "captcha-ok".to_string(),
                })
                .await;
            assert_eq!(result.unwrap_err(), IdentityError::InvalidPhoneNumber);
        }
    }
}
