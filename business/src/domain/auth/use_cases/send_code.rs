use async_trait::async_trait;

use crate::domain::auth::errors::IdentityError;
use crate::domain::auth::model::PhoneVerification;

pub struct SendPhoneCodeParams {
    /// E.164 formatted phone number, e.g. "+966501234567".
    pub phone_number: String,
    /// Human-verification token obtained by the client for this challenge.
    pub recaptcha_token: String,
}

#[async_trait]
pub trait SendPhoneCodeUseCase: Send + Sync {
    async fn execute(
        &self,
        params: SendPhoneCodeParams,
    ) -> Result<PhoneVerification, IdentityError>;
}
