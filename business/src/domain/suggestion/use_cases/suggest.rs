use async_trait::async_trait;

use crate::domain::suggestion::errors::SuggestionError;
use crate::domain::suggestion::model::ComplementarySuggestions;

pub struct SuggestComplementsParams {
    /// Display name of the selected service, as shown in the catalog.
    pub selected_service: String,
}

/// Outcome of one suggestion request. A request that was overtaken by a
/// newer one resolves to `Superseded` so its result is never rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionOutcome {
    Fresh(ComplementarySuggestions),
    Superseded,
}

#[async_trait]
pub trait SuggestComplementsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: SuggestComplementsParams,
    ) -> Result<SuggestionOutcome, SuggestionError>;
}
