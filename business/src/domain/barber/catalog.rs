use uuid::Uuid;

use crate::domain::shared::value_objects::Locale;

use super::model::Barber;

/// Statically-defined barber profiles used whenever the remote store is
/// empty or unreachable. Also the seed payload for an unseeded store, so
/// ids are fixed rather than generated.
pub fn fallback_barbers(locale: Locale) -> Vec<Barber> {
    match locale {
        Locale::En => vec![
            Barber::from_repository(
                Uuid::from_u128(0x1001),
                Locale::En,
                "Omar Al-Sayed".to_string(),
                "Classic cuts & royal shave".to_string(),
                12,
                "Master barber trained in Istanbul, known for precision fades and the \
                 traditional hot-towel shave."
                    .to_string(),
            ),
            Barber::from_repository(
                Uuid::from_u128(0x1002),
                Locale::En,
                "Khalid Mansour".to_string(),
                "Beard sculpting".to_string(),
                8,
                "Beard specialist who treats every trim as a tailoring session."
                    .to_string(),
            ),
            Barber::from_repository(
                Uuid::from_u128(0x1003),
                Locale::En,
                "Yousef Darwish".to_string(),
                "Modern styles & coloring".to_string(),
                6,
                "Keeps up with every season's styles and mixes color like a painter."
                    .to_string(),
            ),
        ],
        Locale::Ar => vec![
            Barber::from_repository(
                Uuid::from_u128(0x2001),
                Locale::Ar,
                "عمر السيد".to_string(),
                "قصات كلاسيكية وحلاقة ملكية".to_string(),
                12,
                "حلاق محترف تدرب في إسطنبول، معروف بدقة القصات والحلاقة التقليدية \
                 بالمنشفة الساخنة."
                    .to_string(),
            ),
            Barber::from_repository(
                Uuid::from_u128(0x2002),
                Locale::Ar,
                "خالد منصور".to_string(),
                "تهذيب اللحية".to_string(),
                8,
                "متخصص في اللحى يتعامل مع كل تشذيب كجلسة تفصيل.".to_string(),
            ),
            Barber::from_repository(
                Uuid::from_u128(0x2003),
                Locale::Ar,
                "يوسف درويش".to_string(),
                "قصات عصرية وصبغات".to_string(),
                6,
                "يواكب قصات كل موسم ويمزج الألوان كفنان.".to_string(),
            ),
        ],
    }
}
