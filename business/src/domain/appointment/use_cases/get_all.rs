use async_trait::async_trait;

use crate::domain::appointment::model::Appointment;
use crate::domain::shared::value_objects::Locale;

pub struct GetAppointmentsParams {
    pub locale: Locale,
}

#[async_trait]
pub trait GetAppointmentsUseCase: Send + Sync {
    async fn execute(&self, params: GetAppointmentsParams) -> Vec<Appointment>;
}
