use poem_openapi::Object;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::service::model::Service;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ServiceResponse {
    /// Service unique identifier
    pub id: Uuid,
    /// Display name, also the input to the suggestion endpoint
    pub name: String,
    /// What the service includes
    pub description: String,
    /// Duration in minutes
    pub duration_minutes: u32,
    /// Price in SAR
    pub price_sar: u32,
}

impl From<Service> for ServiceResponse {
    fn from(s: Service) -> Self {
        Self {
            id: s.id,
            name: s.name,
            description: s.description,
            duration_minutes: s.duration_minutes,
            price_sar: s.price_sar,
        }
    }
}
