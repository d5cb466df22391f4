use serde::{Deserialize, Serialize};

/// Two-letter tag selecting both the UI language and which record set is
/// fetched. Every record set exists once per locale; records are never
/// shared across locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    En,
    Ar,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ar];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "ar" => Ok(Locale::Ar),
            _ => Err(format!("Unsupported locale: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn should_parse_supported_locale_tags() {
        assert_eq!(Locale::from_str("en").unwrap(), Locale::En);
        assert_eq!(Locale::from_str("ar").unwrap(), Locale::Ar);
    }

    #[test]
    fn should_reject_unsupported_locale_tags() {
        assert!(Locale::from_str("fr").is_err());
        assert!(Locale::from_str("EN").is_err());
        assert!(Locale::from_str("").is_err());
    }

    #[test]
    fn should_round_trip_through_display() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_str(&locale.to_string()).unwrap(), locale);
        }
    }
}
