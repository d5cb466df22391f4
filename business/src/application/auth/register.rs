use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::IdentityError;
use crate::domain::auth::model::AuthSession;
use crate::domain::auth::services::IdentityProviderService;
use crate::domain::auth::use_cases::register::{RegisterParams, RegisterUseCase};
use crate::domain::logger::Logger;

pub struct RegisterUseCaseImpl {
    pub provider: Arc<dyn IdentityProviderService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RegisterUseCase for RegisterUseCaseImpl {
    async fn execute(&self, params: RegisterParams) -> Result<AuthSession, IdentityError> {
        self.logger.info("Registering new email account");

        match self
            .provider
            .register(&params.email, &params.password)
            .await
        {
            Ok(session) => {
                self.logger
                    .info(&format!("Registered uid {}", session.uid));
                Ok(session)
            }
            Err(err) => {
                self.logger.warn(&format!("Registration rejected: {}", err));
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::model::PhoneVerification;
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
    async fn should_surface_email_in_use_rejection() {
        let mut provider = MockProvider::new();
        provider
            .expect_register()
            .returning(|_, _| Err(IdentityError::EmailInUse));

        let use_case = RegisterUseCaseImpl {
            provider: Arc::new(provider),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RegisterParams {
                email: "taken@halaq.sa".to_string(),
                password: "secret123".to_string(),
            })
            .await;

        assert_eq!(result.unwrap_err(), IdentityError::EmailInUse);
    }
}
