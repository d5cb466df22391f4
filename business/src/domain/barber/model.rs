use uuid::Uuid;

use crate::domain::shared::value_objects::Locale;

/// A barber profile as shown on the team page. Each conceptual barber exists
/// as one independent record per locale.
#[derive(Debug, Clone, PartialEq)]
pub struct Barber {
    pub id: Uuid,
    pub locale: Locale,
    pub name: String,
    pub specialty: String,
    pub experience_years: u8,
    pub bio: String,
}

impl Barber {
    /// Constructor for records already stored in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        locale: Locale,
        name: String,
        specialty: String,
        experience_years: u8,
        bio: String,
    ) -> Self {
        Self {
            id,
            locale,
            name,
            specialty,
            experience_years,
            bio,
        }
    }
}
