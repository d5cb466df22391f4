#[derive(Debug, thiserror::Error)]
pub enum SuggestionError {
    #[error("suggestion.empty_selection")]
    EmptySelection,
    /// Transport failure, non-success status, empty model output and schema
    /// mismatch all collapse into this one variant; callers get no subtype.
    #[error("suggestion.fetch_failed")]
    FetchFailed,
}
