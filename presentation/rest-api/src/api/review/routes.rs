use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::review::use_cases::get_all::{GetReviewsParams, GetReviewsUseCase};

use crate::api::error::{ErrorResponse, parse_locale};
use crate::api::review::dto::ReviewResponse;
use crate::api::tags::ApiTags;

pub struct ReviewApi {
    get_all_use_case: Arc<dyn GetReviewsUseCase>,
}

impl ReviewApi {
    pub fn new(get_all_use_case: Arc<dyn GetReviewsUseCase>) -> Self {
        Self { get_all_use_case }
    }
}

/// Review API
#[OpenApi]
impl ReviewApi {
    /// List customer reviews for a locale
    #[oai(path = "/reviews", method = "get", tag = "ApiTags::Reviews")]
    async fn get_reviews(
        &self,
        /// Locale tag, "en" (default) or "ar"
        lang: Query<Option<String>>,
    ) -> GetReviewsResponse {
        let locale = match parse_locale(lang.0.as_deref()) {
            Ok(locale) => locale,
            Err(json) => return GetReviewsResponse::BadRequest(json),
        };

        let records = self
            .get_all_use_case
            .execute(GetReviewsParams { locale })
            .await;

        GetReviewsResponse::Ok(Json(records.into_iter().map(|r| r.into()).collect()))
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetReviewsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ReviewResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}
