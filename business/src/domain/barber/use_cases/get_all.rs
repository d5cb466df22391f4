use async_trait::async_trait;

use crate::domain::barber::model::Barber;
use crate::domain::shared::fallback::ResolvedList;
use crate::domain::shared::value_objects::Locale;

pub struct GetBarbersParams {
    pub locale: Locale,
}

/// Resolution is total: the store's instability is hidden behind the
/// fallback catalog, so there is no error case to surface.
#[async_trait]
pub trait GetBarbersUseCase: Send + Sync {
    async fn execute(&self, params: GetBarbersParams) -> ResolvedList<Barber>;
}
