use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::Locale;

use super::model::Promotion;

#[async_trait]
pub trait PromotionRepository: Send + Sync {
    async fn get_by_locale(&self, locale: Locale) -> Result<Vec<Promotion>, RepositoryError>;
    async fn save(&self, promotion: &Promotion) -> Result<(), RepositoryError>;
    async fn count(&self) -> Result<i64, RepositoryError>;
}
