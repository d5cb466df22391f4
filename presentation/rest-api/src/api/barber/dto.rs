use poem_openapi::Object;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::barber::model::Barber;
use business::domain::shared::fallback::{DataSource, ResolvedList};
use business::domain::shared::value_objects::Locale;

use crate::i18n::messages::messages;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct BarberResponse {
    /// Barber unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Short specialty line
    pub specialty: String,
    /// Years behind the chair
    pub experience_years: u8,
    /// Profile bio
    pub bio: String,
}

impl From<Barber> for BarberResponse {
    fn from(b: Barber) -> Self {
        Self {
            id: b.id,
            name: b.name,
            specialty: b.specialty,
            experience_years: b.experience_years,
            bio: b.bio,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct BarberListResponse {
    pub barbers: Vec<BarberResponse>,
    /// True when the list came from the remote store rather than the
    /// static catalog.
    pub using_remote_data: bool,
    /// True when the remote store could not be reached.
    pub fetch_error: bool,
    /// Localized disclosure shown whenever the static catalog is served.
    #[oai(skip_serializing_if_is_none)]
    pub notice: Option<String>,
}

impl BarberListResponse {
    pub fn from_resolved(resolved: ResolvedList<Barber>, locale: Locale) -> Self {
        let notice = match resolved.source {
            DataSource::Remote => None,
            DataSource::FallbackAfterEmpty => {
                Some(messages(locale).sample_data_note.to_string())
            }
            DataSource::FallbackAfterError => {
                Some(messages(locale).remote_unavailable_warning.to_string())
            }
        };

        Self {
            using_remote_data: resolved.using_remote_data(),
            fetch_error: resolved.fetch_error(),
            barbers: resolved.records.into_iter().map(|b| b.into()).collect(),
            notice,
        }
    }
}
