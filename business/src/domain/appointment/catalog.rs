use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::shared::value_objects::Locale;

use super::model::{Appointment, AppointmentStatus};

/// Sample appointments for the mock appointments view, kept relative to the
/// current date so the view never looks stale.
pub fn sample_appointments(locale: Locale) -> Vec<Appointment> {
    let now = Utc::now();
    match locale {
        Locale::En => vec![
            Appointment {
                id: Uuid::from_u128(0x9001),
                locale: Locale::En,
                service_name: "Sultan's Haircut".to_string(),
                barber_name: "Omar Al-Sayed".to_string(),
                scheduled_at: now + Duration::days(2),
                status: AppointmentStatus::Upcoming,
            },
            Appointment {
                id: Uuid::from_u128(0x9002),
                locale: Locale::En,
                service_name: "Beard Trim".to_string(),
                barber_name: "Khalid Mansour".to_string(),
                scheduled_at: now - Duration::days(12),
                status: AppointmentStatus::Completed,
            },
            Appointment {
                id: Uuid::from_u128(0x9003),
                locale: Locale::En,
                service_name: "Royal Shave".to_string(),
                barber_name: "Omar Al-Sayed".to_string(),
                scheduled_at: now - Duration::days(30),
                status: AppointmentStatus::Cancelled,
            },
        ],
        Locale::Ar => vec![
            Appointment {
                id: Uuid::from_u128(0xA001),
                locale: Locale::Ar,
                service_name: "قصة السلطان".to_string(),
                barber_name: "عمر السيد".to_string(),
                scheduled_at: now + Duration::days(2),
                status: AppointmentStatus::Upcoming,
            },
            Appointment {
                id: Uuid::from_u128(0xA002),
                locale: Locale::Ar,
                service_name: "تهذيب اللحية".to_string(),
                barber_name: "خالد منصور".to_string(),
                scheduled_at: now - Duration::days(12),
                status: AppointmentStatus::Completed,
            },
            Appointment {
                id: Uuid::from_u128(0xA003),
                locale: Locale::Ar,
                service_name: "الحلاقة الملكية".to_string(),
                barber_name: "عمر السيد".to_string(),
                scheduled_at: now - Duration::days(30),
                status: AppointmentStatus::Cancelled,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_provide_appointments_for_every_locale() {
        for locale in Locale::ALL {
            let records = sample_appointments(locale);
            assert!(!records.is_empty());
            assert!(records.iter().all(|a| a.locale == locale));
        }
    }

    #[test]
    fn should_include_an_upcoming_appointment() {
        let records = sample_appointments(Locale::En);
        assert!(
            records
                .iter()
                .any(|a| a.status == AppointmentStatus::Upcoming)
        );
    }
}
