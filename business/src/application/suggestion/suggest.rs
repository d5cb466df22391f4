use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shared::request_tracker::RequestTracker;
use crate::domain::suggestion::errors::SuggestionError;
use crate::domain::suggestion::services::SuggestionGeneratorService;
use crate::domain::suggestion::use_cases::suggest::{
    SuggestComplementsParams, SuggestComplementsUseCase, SuggestionOutcome,
};

/// One instance serves one selection surface; overlapping invocations race
/// through the tracker and only the most recent one resolves `Fresh`.
pub struct SuggestComplementsUseCaseImpl {
    generator: Arc<dyn SuggestionGeneratorService>,
    logger: Arc<dyn Logger>,
    tracker: RequestTracker,
}

impl SuggestComplementsUseCaseImpl {
    pub fn new(generator: Arc<dyn SuggestionGeneratorService>, logger: Arc<dyn Logger>) -> Self {
        Self {
            generator,
            logger,
            tracker: RequestTracker::new(),
        }
    }
}

#[async_trait]
impl SuggestComplementsUseCase for SuggestComplementsUseCaseImpl {
    async fn execute(
        &self,
        params: SuggestComplementsParams,
    ) -> Result<SuggestionOutcome, SuggestionError> {
        let selected = params.selected_service.trim();
        if selected.is_empty() {
            return Err(SuggestionError::EmptySelection);
        }

        self.logger
            .info(&format!("Fetching suggestions for '{}'", selected));

        let ticket = self.tracker.begin();
        let suggestions = self.generator.suggest(selected).await?;

        if !self.tracker.is_current(ticket) {
            self.logger
                .debug("Discarding suggestion response for a superseded selection");
            return Ok(SuggestionOutcome::Superseded);
        }

        self.logger.info(&format!(
            "Received {} suggested services",
            suggestions.suggested_services.len()
        ));
        Ok(SuggestionOutcome::Fresh(suggestions))
    }
}
