use uuid::Uuid;

use crate::domain::shared::value_objects::Locale;

/// An offered service as shown on the services page. The display name is
/// what the suggestion flow forwards to the model, so it must stay
/// presentable on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub id: Uuid,
    pub locale: Locale,
    pub name: String,
    pub description: String,
    pub duration_minutes: u32,
    pub price_sar: u32,
}
