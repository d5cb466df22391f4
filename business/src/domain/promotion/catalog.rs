use uuid::Uuid;

use crate::domain::shared::value_objects::Locale;

use super::model::Promotion;

/// Statically-defined promotions used whenever the remote store is empty or
/// unreachable. Doubles as the seed payload, so ids are fixed.
pub fn fallback_promotions(locale: Locale) -> Vec<Promotion> {
    match locale {
        Locale::En => vec![
            Promotion::from_repository(
                Uuid::from_u128(0x3001),
                Locale::En,
                "Groom & Go Tuesday".to_string(),
                "Haircut plus beard trim every Tuesday before 2pm.".to_string(),
                25,
                "TUESDAY25".to_string(),
            ),
            Promotion::from_repository(
                Uuid::from_u128(0x3002),
                Locale::En,
                "First Visit Welcome".to_string(),
                "New guests get a complimentary hot-towel finish with any haircut."
                    .to_string(),
                15,
                "WELCOME15".to_string(),
            ),
        ],
        Locale::Ar => vec![
            Promotion::from_repository(
                Uuid::from_u128(0x4001),
                Locale::Ar,
                "ثلاثاء الأناقة".to_string(),
                "قصة شعر مع تهذيب اللحية كل ثلاثاء قبل الثانية ظهراً.".to_string(),
                25,
                "TUESDAY25".to_string(),
            ),
            Promotion::from_repository(
                Uuid::from_u128(0x4002),
                Locale::Ar,
                "ترحيب الزيارة الأولى".to_string(),
                "الضيوف الجدد يحصلون على لمسة المنشفة الساخنة مجاناً مع أي قصة."
                    .to_string(),
                15,
                "WELCOME15".to_string(),
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_provide_records_for_every_locale() {
        for locale in Locale::ALL {
            let promotions = fallback_promotions(locale);
            assert!(!promotions.is_empty());
            assert!(promotions.iter().all(|p| p.locale == locale));
        }
    }
}
