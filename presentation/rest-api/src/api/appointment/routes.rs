use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::appointment::use_cases::get_all::{
    GetAppointmentsParams, GetAppointmentsUseCase,
};

use crate::api::appointment::dto::AppointmentResponse;
use crate::api::error::{ErrorResponse, parse_locale};
use crate::api::tags::ApiTags;

pub struct AppointmentApi {
    get_all_use_case: Arc<dyn GetAppointmentsUseCase>,
}

impl AppointmentApi {
    pub fn new(get_all_use_case: Arc<dyn GetAppointmentsUseCase>) -> Self {
        Self { get_all_use_case }
    }
}

/// Appointment API
///
/// Serves the sample records behind the appointments view. There is no
/// booking engine; these are display records only.
#[OpenApi]
impl AppointmentApi {
    /// List sample appointments for a locale
    #[oai(path = "/appointments", method = "get", tag = "ApiTags::Appointments")]
    async fn get_appointments(
        &self,
        /// Locale tag, "en" (default) or "ar"
        lang: Query<Option<String>>,
    ) -> GetAppointmentsResponse {
        let locale = match parse_locale(lang.0.as_deref()) {
            Ok(locale) => locale,
            Err(json) => return GetAppointmentsResponse::BadRequest(json),
        };

        let records = self
            .get_all_use_case
            .execute(GetAppointmentsParams { locale })
            .await;

        GetAppointmentsResponse::Ok(Json(records.into_iter().map(|a| a.into()).collect()))
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAppointmentsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<AppointmentResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}
