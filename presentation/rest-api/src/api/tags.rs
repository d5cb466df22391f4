use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Barbers,
    Promotions,
    Services,
    Reviews,
    Appointments,
    Suggestions,
    Auth,
}
