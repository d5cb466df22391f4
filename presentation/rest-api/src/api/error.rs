use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};
use std::str::FromStr;

use business::domain::shared::value_objects::Locale;

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Resolves the `lang` query parameter; absent means English.
pub fn parse_locale(lang: Option<&str>) -> Result<Locale, Json<ErrorResponse>> {
    match lang {
        None => Ok(Locale::En),
        Some(tag) => Locale::from_str(tag).map_err(|_| {
            Json(ErrorResponse {
                name: "ValidationError".to_string(),
                message: "locale.unsupported".to_string(),
            })
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_english_when_lang_is_absent() {
        assert_eq!(parse_locale(None).unwrap(), Locale::En);
    }

    #[test]
    fn should_parse_supported_tags_and_reject_others() {
        assert_eq!(parse_locale(Some("ar")).unwrap(), Locale::Ar);
        assert!(parse_locale(Some("fr")).is_err());
    }
}
