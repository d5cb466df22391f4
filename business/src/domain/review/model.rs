use uuid::Uuid;

use crate::domain::shared::value_objects::Locale;

/// A customer review as shown on the home page, one record per locale.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: Uuid,
    pub locale: Locale,
    pub author: String,
    /// 1 to 5 stars.
    pub rating: u8,
    pub comment: String,
}
