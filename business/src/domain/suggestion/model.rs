/// The recommendation pair returned for a selected service: complementary
/// services to add on, plus a beverage to serve during the visit.
///
/// Both fields are always present after a successful parse; the client never
/// sees a partially-shaped object. Either may still be empty content-wise
/// (the model can return an empty list or an empty string).
#[derive(Debug, Clone, PartialEq)]
pub struct ComplementarySuggestions {
    /// Order-significant: rendered in the order the model ranked them.
    pub suggested_services: Vec<String>,
    pub coffee_suggestion: String,
}
