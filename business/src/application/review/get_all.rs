use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::review::catalog;
use crate::domain::review::model::Review;
use crate::domain::review::use_cases::get_all::{GetReviewsParams, GetReviewsUseCase};

pub struct GetReviewsUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetReviewsUseCase for GetReviewsUseCaseImpl {
    async fn execute(&self, params: GetReviewsParams) -> Vec<Review> {
        let records = catalog::reviews(params.locale);
        self.logger.debug(&format!(
            "Serving {} reviews for locale {}",
            records.len(),
            params.locale
        ));
        records
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
    async fn should_serve_the_locale_scoped_reviews() {
        let use_case = GetReviewsUseCaseImpl {
            logger: mock_logger(),
        };

        for locale in Locale::ALL {
            let records = use_case.execute(GetReviewsParams { locale }).await;
            assert_eq!(records, catalog::reviews(locale));
        }
    }
}
