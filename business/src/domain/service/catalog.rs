use uuid::Uuid;

use crate::domain::shared::value_objects::Locale;

use super::model::Service;

/// The service menu, one record set per locale. The catalog that feeds the
/// suggestion flow is this list's display names.
pub fn services(locale: Locale) -> Vec<Service> {
    match locale {
        Locale::En => vec![
            Service {
                id: Uuid::from_u128(0x5001),
                locale: Locale::En,
                name: "Sultan's Haircut".to_string(),
                description: "Signature cut with consultation, wash and styling."
                    .to_string(),
                duration_minutes: 45,
                price_sar: 80,
            },
            Service {
                id: Uuid::from_u128(0x5002),
                locale: Locale::En,
                name: "Beard Trim".to_string(),
                description: "Shaping, line-up and conditioning oil.".to_string(),
                duration_minutes: 20,
                price_sar: 40,
            },
            Service {
                id: Uuid::from_u128(0x5003),
                locale: Locale::En,
                name: "Royal Shave".to_string(),
                description: "Straight-razor shave with hot towels.".to_string(),
                duration_minutes: 30,
                price_sar: 60,
            },
            Service {
                id: Uuid::from_u128(0x5004),
                locale: Locale::En,
                name: "Facial".to_string(),
                description: "Deep-cleansing facial with steam and mask.".to_string(),
                duration_minutes: 35,
                price_sar: 90,
            },
        ],
        Locale::Ar => vec![
            Service {
                id: Uuid::from_u128(0x6001),
                locale: Locale::Ar,
                name: "قصة السلطان".to_string(),
                description: "قصة مميزة مع استشارة وغسيل وتصفيف.".to_string(),
                duration_minutes: 45,
                price_sar: 80,
            },
            Service {
                id: Uuid::from_u128(0x6002),
                locale: Locale::Ar,
                name: "تهذيب اللحية".to_string(),
                description: "تحديد وتشذيب مع زيت معطر.".to_string(),
                duration_minutes: 20,
                price_sar: 40,
            },
            Service {
                id: Uuid::from_u128(0x6003),
                locale: Locale::Ar,
                name: "الحلاقة الملكية".to_string(),
                description: "حلاقة بالموس مع مناشف ساخنة.".to_string(),
                duration_minutes: 30,
                price_sar: 60,
            },
            Service {
                id: Uuid::from_u128(0x6004),
                locale: Locale::Ar,
                name: "تنظيف البشرة".to_string(),
                description: "تنظيف عميق للبشرة مع بخار وقناع.".to_string(),
                duration_minutes: 35,
                price_sar: 90,
            },
        ],
    }
}
