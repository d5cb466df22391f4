use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::auth::errors::IdentityError;
use crate::domain::auth::model::AuthSession;

pub struct VerifyPhoneCodeParams {
    /// Id of the challenge issued by the send-code step.
    pub request_id: Uuid,
    pub code: String,
}

#[async_trait]
pub trait VerifyPhoneCodeUseCase: Send + Sync {
    async fn execute(&self, params: VerifyPhoneCodeParams) -> Result<AuthSession, IdentityError>;
}
