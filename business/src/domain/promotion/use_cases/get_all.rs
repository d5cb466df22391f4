use async_trait::async_trait;

use crate::domain::promotion::model::Promotion;
use crate::domain::shared::fallback::ResolvedList;
use crate::domain::shared::value_objects::Locale;

pub struct GetPromotionsParams {
    pub locale: Locale,
}

/// Resolution is total: the store's instability is hidden behind the
/// fallback catalog, so there is no error case to surface.
#[async_trait]
pub trait GetPromotionsUseCase: Send + Sync {
    async fn execute(&self, params: GetPromotionsParams) -> ResolvedList<Promotion>;
}
