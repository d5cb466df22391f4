use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::IdentityError;
use crate::domain::auth::model::AuthSession;
use crate::domain::auth::services::IdentityProviderService;
use crate::domain::auth::use_cases::sign_in::{SignInParams, SignInUseCase};
use crate::domain::logger::Logger;

pub struct SignInUseCaseImpl {
    pub provider: Arc<dyn IdentityProviderService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SignInUseCase for SignInUseCaseImpl {
    async fn execute(&self, params: SignInParams) -> Result<AuthSession, IdentityError> {
        self.logger.info("Signing in with email credentials");

        match self
            .provider
            .sign_in(&params.email, &params.password)
            .await
        {
            Ok(session) => {
                self.logger
                    .info(&format!("Signed in uid {}", session.uid));
                Ok(session)
            }
            Err(err) => {
                self.logger.warn(&format!("Sign-in rejected: {}", err));
                Err(err)
            }
        }
    }
}
