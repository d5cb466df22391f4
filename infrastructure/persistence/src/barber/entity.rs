use sqlx::FromRow;
use uuid::Uuid;

use business::domain::barber::model::Barber;
use business::domain::shared::value_objects::Locale;

#[derive(Debug, FromRow)]
pub struct BarberEntity {
    pub id: Uuid,
    pub locale: String,
    pub name: String,
    pub specialty: String,
    pub experience_years: i32,
    pub bio: String,
}

impl BarberEntity {
    pub fn into_domain(self) -> Barber {
        Barber::from_repository(
            self.id,
            self.locale.parse::<Locale>().unwrap_or(Locale::En),
            self.name,
            self.specialty,
            u8::try_from(self.experience_years).unwrap_or(0),
            self.bio,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_row_fields_into_the_domain_model() {
        let entity = BarberEntity {
            id: Uuid::from_u128(7),
            locale: "ar".to_string(),
            name: "خالد".to_string(),
            specialty: "لحى".to_string(),
            experience_years: 8,
            bio: "حلاق".to_string(),
        };

        let barber = entity.into_domain();

        assert_eq!(barber.locale, Locale::Ar);
        assert_eq!(barber.experience_years, 8);
    }

    #[test]
    fn should_default_unknown_locale_and_negative_experience() {
        let entity = BarberEntity {
            id: Uuid::from_u128(8),
            locale: "de".to_string(),
            name: "X".to_string(),
            specialty: "Y".to_string(),
            experience_years: -3,
            bio: String::new(),
        };

        let barber = entity.into_domain();

        assert_eq!(barber.locale, Locale::En);
        assert_eq!(barber.experience_years, 0);
    }
}
