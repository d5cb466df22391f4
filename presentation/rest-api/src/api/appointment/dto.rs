use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::appointment::model::{Appointment, AppointmentStatus};

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum AppointmentStatusDto {
    #[oai(rename = "upcoming")]
    Upcoming,
    #[oai(rename = "completed")]
    Completed,
    #[oai(rename = "cancelled")]
    Cancelled,
}

impl From<AppointmentStatus> for AppointmentStatusDto {
    fn from(status: AppointmentStatus) -> Self {
        match status {
            AppointmentStatus::Upcoming => AppointmentStatusDto::Upcoming,
            AppointmentStatus::Completed => AppointmentStatusDto::Completed,
            AppointmentStatus::Cancelled => AppointmentStatusDto::Cancelled,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct AppointmentResponse {
    /// Appointment unique identifier
    pub id: Uuid,
    /// Booked service display name
    pub service_name: String,
    /// Assigned barber display name
    pub barber_name: String,
    /// Scheduled time
    pub scheduled_at: DateTime<Utc>,
    /// Appointment state
    pub status: AppointmentStatusDto,
}

impl From<Appointment> for AppointmentResponse {
    fn from(a: Appointment) -> Self {
        Self {
            id: a.id,
            service_name: a.service_name,
            barber_name: a.barber_name,
            scheduled_at: a.scheduled_at,
            status: a.status.into(),
        }
    }
}
