use async_trait::async_trait;

use crate::domain::auth::errors::IdentityError;
use crate::domain::auth::model::AuthSession;

pub struct RegisterParams {
    pub email: String,
    pub password: String,
}

#[async_trait]
pub trait RegisterUseCase: Send + Sync {
    async fn execute(&self, params: RegisterParams) -> Result<AuthSession, IdentityError>;
}
