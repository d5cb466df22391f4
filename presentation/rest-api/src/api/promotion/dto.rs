use poem_openapi::Object;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::promotion::model::Promotion;
use business::domain::shared::fallback::{DataSource, ResolvedList};
use business::domain::shared::value_objects::Locale;

use crate::i18n::messages::messages;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct PromotionResponse {
    /// Promotion unique identifier
    pub id: Uuid,
    /// Offer title
    pub title: String,
    /// Offer details
    pub description: String,
    /// Discount percentage
    pub discount_percent: u8,
    /// Code to quote at the counter
    pub code: String,
}

impl From<Promotion> for PromotionResponse {
    fn from(p: Promotion) -> Self {
        Self {
            id: p.id,
            title: p.title,
            description: p.description,
            discount_percent: p.discount_percent,
            code: p.code,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct PromotionListResponse {
    pub promotions: Vec<PromotionResponse>,
    /// True when the list came from the remote store rather than the
    /// static catalog.
    pub using_remote_data: bool,
    /// True when the remote store could not be reached.
    pub fetch_error: bool,
    /// Localized disclosure shown whenever the static catalog is served.
    #[oai(skip_serializing_if_is_none)]
    pub notice: Option<String>,
}

impl PromotionListResponse {
    pub fn from_resolved(resolved: ResolvedList<Promotion>, locale: Locale) -> Self {
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
            promotions: resolved.records.into_iter().map(|p| p.into()).collect(),
            notice,
        }
    }
}
