use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::service::catalog;
use crate::domain::service::model::Service;
use crate::domain::service::use_cases::get_all::{GetServicesParams, GetServicesUseCase};

pub struct GetServicesUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetServicesUseCase for GetServicesUseCaseImpl {
    async fn execute(&self, params: GetServicesParams) -> Vec<Service> {
        let menu = catalog::services(params.locale);
        self.logger.debug(&format!(
            "Serving {} services for locale {}",
            menu.len(),
            params.locale
        ));
        menu
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::Locale;
    use mockall::mock;

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_serve_the_locale_scoped_menu() {
        let use_case = GetServicesUseCaseImpl {
            logger: mock_logger(),
        };

        for locale in Locale::ALL {
            let menu = use_case.execute(GetServicesParams { locale }).await;
            assert_eq!(menu, catalog::services(locale));
        }
    }
}
