use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::service::use_cases::get_all::{GetServicesParams, GetServicesUseCase};

use crate::api::error::{ErrorResponse, parse_locale};
use crate::api::service::dto::ServiceResponse;
use crate::api::tags::ApiTags;

pub struct ServiceApi {
    get_all_use_case: Arc<dyn GetServicesUseCase>,
}

impl ServiceApi {
    pub fn new(get_all_use_case: Arc<dyn GetServicesUseCase>) -> Self {
        Self { get_all_use_case }
    }
}

/// Service menu API
#[OpenApi]
impl ServiceApi {
    /// List the service menu for a locale
    #[oai(path = "/services", method = "get", tag = "ApiTags::Services")]
    async fn get_services(
        &self,
        /// Locale tag, "en" (default) or "ar"
        lang: Query<Option<String>>,
    ) -> GetServicesResponse {
        let locale = match parse_locale(lang.0.as_deref()) {
            Ok(locale) => locale,
            Err(json) => return GetServicesResponse::BadRequest(json),
        };

        let menu = self
            .get_all_use_case
            .execute(GetServicesParams { locale })
            .await;

        GetServicesResponse::Ok(Json(menu.into_iter().map(|s| s.into()).collect()))
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetServicesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ServiceResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}
