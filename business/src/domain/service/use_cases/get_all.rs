use async_trait::async_trait;

use crate::domain::service::model::Service;
use crate::domain::shared::value_objects::Locale;

pub struct GetServicesParams {
    pub locale: Locale,
}

#[async_trait]
pub trait GetServicesUseCase: Send + Sync {
    async fn execute(&self, params: GetServicesParams) -> Vec<Service>;
}
