use async_trait::async_trait;

use crate::domain::auth::errors::IdentityError;
use crate::domain::auth::model::AuthSession;

pub struct SignInParams {
    pub email: String,
    pub password: String,
}

#[async_trait]
pub trait SignInUseCase: Send + Sync {
    async fn execute(&self, params: SignInParams) -> Result<AuthSession, IdentityError>;
}
