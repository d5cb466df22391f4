use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::barber::use_cases::get_all::{GetBarbersParams, GetBarbersUseCase};

use crate::api::barber::dto::BarberListResponse;
use crate::api::error::{ErrorResponse, parse_locale};
use crate::api::tags::ApiTags;

pub struct BarberApi {
    get_all_use_case: Arc<dyn GetBarbersUseCase>,
}

impl BarberApi {
    pub fn new(get_all_use_case: Arc<dyn GetBarbersUseCase>) -> Self {
        Self { get_all_use_case }
    }
}

/// Barber API
///
/// Endpoints for the team page. Lists are always populated: when the remote
/// store is empty or unreachable the static catalog is served instead and
/// the response discloses it.
#[OpenApi]
impl BarberApi {
    /// List barbers for a locale
    #[oai(path = "/barbers", method = "get", tag = "ApiTags::Barbers")]
    async fn get_barbers(
        &self,
        /// Locale tag, "en" (default) or "ar"
        lang: Query<Option<String>>,
    ) -> GetBarbersResponse {
        let locale = match parse_locale(lang.0.as_deref()) {
            Ok(locale) => locale,
            Err(json) => return GetBarbersResponse::BadRequest(json),
        };

        let resolved = self
            .get_all_use_case
            .execute(GetBarbersParams { locale })
            .await;

        GetBarbersResponse::Ok(Json(BarberListResponse::from_resolved(resolved, locale)))
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetBarbersResponse {
    #[oai(status = 200)]
    Ok(Json<BarberListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}
