use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::Locale;

use super::model::Barber;

#[async_trait]
pub trait BarberRepository: Send + Sync {
    async fn get_by_locale(&self, locale: Locale) -> Result<Vec<Barber>, RepositoryError>;
    async fn save(&self, barber: &Barber) -> Result<(), RepositoryError>;
    async fn count(&self) -> Result<i64, RepositoryError>;
}
