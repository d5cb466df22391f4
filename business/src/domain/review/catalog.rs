use uuid::Uuid;

use crate::domain::shared::value_objects::Locale;

use super::model::Review;

pub fn reviews(locale: Locale) -> Vec<Review> {
    match locale {
        Locale::En => vec![
            Review {
                id: Uuid::from_u128(0x7001),
                locale: Locale::En,
                author: "Faisal".to_string(),
                rating: 5,
                comment: "Best fade in town, and the Turkish coffee is a ritual."
                    .to_string(),
            },
            Review {
                id: Uuid::from_u128(0x7002),
                locale: Locale::En,
                author: "Ahmed".to_string(),
                rating: 4,
                comment: "Khalid shaped my beard better than I asked for.".to_string(),
            },
            Review {
                id: Uuid::from_u128(0x7003),
                locale: Locale::En,
                author: "Sami".to_string(),
                rating: 5,
                comment: "Walked in tired, walked out a sultan.".to_string(),
            },
        ],
        Locale::Ar => vec![
            Review {
                id: Uuid::from_u128(0x8001),
                locale: Locale::Ar,
                author: "فيصل".to_string(),
                rating: 5,
                comment: "أفضل قصة في المدينة، والقهوة التركية طقس بحد ذاتها."
                    .to_string(),
            },
            Review {
                id: Uuid::from_u128(0x8002),
                locale: Locale::Ar,
                author: "أحمد".to_string(),
                rating: 4,
                comment: "خالد هذب لحيتي أفضل مما طلبت.".to_string(),
            },
            Review {
                id: Uuid::from_u128(0x8003),
                locale: Locale::Ar,
                author: "سامي".to_string(),
                rating: 5,
                comment: "دخلت متعباً وخرجت سلطاناً.".to_string(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_provide_reviews_with_valid_ratings_for_every_locale() {
        for locale in Locale::ALL {
            let records = reviews(locale);
            assert!(!records.is_empty());
            assert!(records.iter().all(|r| r.locale == locale));
            assert!(records.iter().all(|r| (1..=5).contains(&r.rating)));
        }
    }
}
