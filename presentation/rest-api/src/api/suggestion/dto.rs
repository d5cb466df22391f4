use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::suggestion::model::ComplementarySuggestions;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct SuggestionRequest {
    /// Display name of the selected service, as listed by /services
    pub selected_service: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct SuggestionResponse {
    /// Complementary services, most relevant first
    pub suggested_services: Vec<String>,
    /// Beverage to serve during the visit
    pub coffee_suggestion: String,
}

impl From<ComplementarySuggestions> for SuggestionResponse {
    fn from(s: ComplementarySuggestions) -> Self {
        Self {
            suggested_services: s.suggested_services,
            coffee_suggestion: s.coffee_suggestion,
        }
    }
}
