use sqlx::FromRow;
use uuid::Uuid;

use business::domain::promotion::model::Promotion;
use business::domain::shared::value_objects::Locale;

#[derive(Debug, FromRow)]
pub struct PromotionEntity {
    pub id: Uuid,
    pub locale: String,
    pub title: String,
    pub description: String,
    pub discount_percent: i32,
    pub code: String,
}

impl PromotionEntity {
    pub fn into_domain(self) -> Promotion {
        Promotion::from_repository(
            self.id,
            self.locale.parse::<Locale>().unwrap_or(Locale::En),
            self.title,
            self.description,
            u8::try_from(self.discount_percent).unwrap_or(0),
            self.code,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_row_fields_into_the_domain_model() {
        let entity = PromotionEntity {
            id: Uuid::from_u128(9),
            locale: "en".to_string(),
            title: "Groom & Go".to_string(),
            description: "Tuesday deal".to_string(),
            discount_percent: 25,
            code: "TUESDAY25".to_string(),
        };

        let promotion = entity.into_domain();

        assert_eq!(promotion.locale, Locale::En);
        assert_eq!(promotion.discount_percent, 25);
        assert_eq!(promotion.code, "TUESDAY25");
    }
}
