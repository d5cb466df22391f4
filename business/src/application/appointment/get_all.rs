use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::appointment::catalog;
use crate::domain::appointment::model::Appointment;
use crate::domain::appointment::use_cases::get_all::{
    GetAppointmentsParams, GetAppointmentsUseCase,
};
use crate::domain::logger::Logger;

pub struct GetAppointmentsUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAppointmentsUseCase for GetAppointmentsUseCaseImpl {
    async fn execute(&self, params: GetAppointmentsParams) -> Vec<Appointment> {
        let records = catalog::sample_appointments(params.locale);
        self.logger.debug(&format!(
            "Serving {} sample appointments for locale {}",
            records.len(),
            params.locale
        ));
        records
    }
}
