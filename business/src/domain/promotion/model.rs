use uuid::Uuid;

use crate::domain::shared::value_objects::Locale;

/// A running promotion as shown on the offers page, one record per locale.
#[derive(Debug, Clone, PartialEq)]
pub struct Promotion {
    pub id: Uuid,
    pub locale: Locale,
    pub title: String,
    pub description: String,
    pub discount_percent: u8,
    pub code: String,
}

impl Promotion {
    /// Constructor for records already stored in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        locale: Locale,
        title: String,
        description: String,
        discount_percent: u8,
        code: String,
    ) -> Self {
        Self {
            id,
            locale,
            title,
            description,
            discount_percent,
            code,
        }
    }
}
