use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::promotion::use_cases::get_all::{GetPromotionsParams, GetPromotionsUseCase};

use crate::api::error::{ErrorResponse, parse_locale};
use crate::api::promotion::dto::PromotionListResponse;
use crate::api::tags::ApiTags;

pub struct PromotionApi {
    get_all_use_case: Arc<dyn GetPromotionsUseCase>,
}

impl PromotionApi {
    pub fn new(get_all_use_case: Arc<dyn GetPromotionsUseCase>) -> Self {
        Self { get_all_use_case }
    }
}

/// Promotion API
///
/// Endpoints for the offers page, with the same always-populated fallback
/// behavior as the barbers list.
#[OpenApi]
impl PromotionApi {
    /// List promotions for a locale
    #[oai(path = "/promotions", method = "get", tag = "ApiTags::Promotions")]
    async fn get_promotions(
        &self,
        /// Locale tag, "en" (default) or "ar"
        lang: Query<Option<String>>,
    ) -> GetPromotionsResponse {
        let locale = match parse_locale(lang.0.as_deref()) {
            Ok(locale) => locale,
            Err(json) => return GetPromotionsResponse::BadRequest(json),
        };

        let resolved = self
            .get_all_use_case
            .execute(GetPromotionsParams { locale })
            .await;

        GetPromotionsResponse::Ok(Json(PromotionListResponse::from_resolved(resolved, locale)))
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetPromotionsResponse {
    #[oai(status = 200)]
    Ok(Json<PromotionListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}
