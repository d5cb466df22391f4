use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::suggestion::use_cases::suggest::{
    SuggestComplementsParams, SuggestComplementsUseCase, SuggestionOutcome,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::suggestion::dto::{SuggestionRequest, SuggestionResponse};
use crate::api::tags::ApiTags;

pub struct SuggestionApi {
    suggest_use_case: Arc<dyn SuggestComplementsUseCase>,
}

impl SuggestionApi {
    pub fn new(suggest_use_case: Arc<dyn SuggestComplementsUseCase>) -> Self {
        Self { suggest_use_case }
    }
}

/// Suggestion API
///
/// Endpoint for the complementary-service flow: the selected service name
/// goes to the hosted model and comes back as a recommendation pair.
#[OpenApi]
impl SuggestionApi {
    /// Suggest complementary services for a selection
    ///
    /// Every call is a fresh model invocation; there is no caching or
    /// retry. A request overtaken by a newer selection resolves as 409 and
    /// its result is never rendered.
    #[oai(path = "/suggestions", method = "post", tag = "ApiTags::Suggestions")]
    async fn suggest(&self, body: Json<SuggestionRequest>) -> SuggestResponse {
        match self
            .suggest_use_case
            .execute(SuggestComplementsParams {
                selected_service: body.0.selected_service,
            })
            .await
        {
            Ok(SuggestionOutcome::Fresh(suggestions)) => {
                SuggestResponse::Ok(Json(suggestions.into()))
            }
            Ok(SuggestionOutcome::Superseded) => SuggestResponse::Conflict(Json(ErrorResponse {
                name: "SupersededError".to_string(),
                message: "suggestion.superseded".to_string(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SuggestResponse::BadRequest(json),
                    _ => SuggestResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SuggestResponse {
    #[oai(status = 200)]
    Ok(Json<SuggestionResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
