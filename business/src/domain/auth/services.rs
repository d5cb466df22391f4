use async_trait::async_trait;

use super::errors::IdentityError;
use super::model::{AuthSession, PhoneVerification};

/// Port to the hosted identity provider. Adapters translate provider error
/// codes into `IdentityError` at this boundary; nothing duck-typed crosses it.
#[async_trait]
pub trait IdentityProviderService: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, IdentityError>;

    async fn register(&self, email: &str, password: &str) -> Result<AuthSession, IdentityError>;

    /// Issues a verification challenge for the phone number. The returned
    /// record must be passed back to `verify_phone_code`.
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
