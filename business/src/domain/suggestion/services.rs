use async_trait::async_trait;

use super::errors::SuggestionError;
use super::model::ComplementarySuggestions;

/// Service port for fetching complementary-service suggestions for a
/// selected service name.
#[async_trait]
pub trait SuggestionGeneratorService: Send + Sync {
    async fn suggest(
        &self,
        selected_service: &str,
    ) -> Result<ComplementarySuggestions, SuggestionError>;
}
