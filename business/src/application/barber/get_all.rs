use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::barber::catalog::fallback_barbers;
use crate::domain::barber::model::Barber;
use crate::domain::barber::repository::BarberRepository;
use crate::domain::barber::use_cases::get_all::{GetBarbersParams, GetBarbersUseCase};
use crate::domain::logger::Logger;
use crate::domain::shared::fallback::{ResolvedList, resolve_with_fallback};

pub struct GetBarbersUseCaseImpl {
    pub repository: Arc<dyn BarberRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetBarbersUseCase for GetBarbersUseCaseImpl {
    async fn execute(&self, params: GetBarbersParams) -> ResolvedList<Barber> {
        self.logger
            .info(&format!("Fetching barbers for locale {}", params.locale));

        let outcome = self.repository.get_by_locale(params.locale).await;
        if outcome.is_err() {
            self.logger
                .warn("Barber query failed, serving fallback catalog");
        }

        let resolved = resolve_with_fallback(outcome, fallback_barbers(params.locale));
        self.logger.info(&format!(
            "Resolved {} barbers (source: {:?})",
            resolved.records.len(),
            resolved.source
        ));
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::fallback::DataSource;
    use crate::domain::shared::value_objects::Locale;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub BarberRepo {}

        #[async_trait]
        impl BarberRepository for BarberRepo {
            async fn get_by_locale(&self, locale: Locale) -> Result<Vec<Barber>, RepositoryError>;
            async fn save(&self, barber: &Barber) -> Result<(), RepositoryError>;
            async fn count(&self) -> Result<i64, RepositoryError>;
        }
    }

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

    fn remote_barber(locale: Locale) -> Barber {
        Barber::from_repository(
            Uuid::new_v4(),
            locale,
            "Hassan".to_string(),
            "Fades".to_string(),
            4,
            "Remote-seeded profile".to_string(),
        )
    }

    #[tokio::test]
    async fn should_return_remote_records_unmodified_when_store_has_data() {
        for locale in Locale::ALL {
            let mut mock_repo = MockBarberRepo::new();
            mock_repo
                .expect_get_by_locale()
                .returning(move |l| Ok(vec![remote_barber(l)]));

            let use_case = GetBarbersUseCaseImpl {
                repository: Arc::new(mock_repo),
                logger: mock_logger(),
            };

            let resolved = use_case.execute(GetBarbersParams { locale }).await;

            assert_eq!(resolved.source, DataSource::Remote);
            assert!(resolved.using_remote_data());
            assert!(!resolved.fetch_error());
            assert_eq!(resolved.records.len(), 1);
            assert_eq!(resolved.records[0].name, "Hassan");
        }
    }

    #[tokio::test]
    async fn should_serve_fallback_without_error_flag_when_store_is_empty() {
        for locale in Locale::ALL {
            let mut mock_repo = MockBarberRepo::new();
            mock_repo.expect_get_by_locale().returning(|_| Ok(vec![]));

            let use_case = GetBarbersUseCaseImpl {
                repository: Arc::new(mock_repo),
                logger: mock_logger(),
            };

            let resolved = use_case.execute(GetBarbersParams { locale }).await;

            assert_eq!(resolved.source, DataSource::FallbackAfterEmpty);
            assert!(!resolved.fetch_error());
            assert_eq!(resolved.records, fallback_barbers(locale));
        }
    }

    #[tokio::test]
    async fn should_serve_fallback_with_error_flag_when_query_fails() {
        for locale in Locale::ALL {
            let mut mock_repo = MockBarberRepo::new();
            mock_repo
                .expect_get_by_locale()
                .returning(|_| Err(RepositoryError::DatabaseError));

            let use_case = GetBarbersUseCaseImpl {
                repository: Arc::new(mock_repo),
                logger: mock_logger(),
            };

            let resolved = use_case.execute(GetBarbersParams { locale }).await;

            assert_eq!(resolved.source, DataSource::FallbackAfterError);
            assert!(resolved.fetch_error());
            assert_eq!(resolved.records, fallback_barbers(locale));
        }
    }
}
