use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::promotion::catalog::fallback_promotions;
use crate::domain::promotion::model::Promotion;
use crate::domain::promotion::repository::PromotionRepository;
use crate::domain::promotion::use_cases::get_all::{GetPromotionsParams, GetPromotionsUseCase};
use crate::domain::shared::fallback::{ResolvedList, resolve_with_fallback};

pub struct GetPromotionsUseCaseImpl {
    pub repository: Arc<dyn PromotionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetPromotionsUseCase for GetPromotionsUseCaseImpl {
    async fn execute(&self, params: GetPromotionsParams) -> ResolvedList<Promotion> {
        self.logger
            .info(&format!("Fetching promotions for locale {}", params.locale));

        let outcome = self.repository.get_by_locale(params.locale).await;
        if outcome.is_err() {
            self.logger
                .warn("Promotion query failed, serving fallback catalog");
        }

        let resolved = resolve_with_fallback(outcome, fallback_promotions(params.locale));
        self.logger.info(&format!(
            "Resolved {} promotions (source: {:?})",
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
        pub PromotionRepo {}

        #[async_trait]
        impl PromotionRepository for PromotionRepo {
            async fn get_by_locale(
                &self,
                locale: Locale,
            ) -> Result<Vec<Promotion>, RepositoryError>;
            async fn save(&self, promotion: &Promotion) -> Result<(), RepositoryError>;
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

    fn remote_promotion(locale: Locale) -> Promotion {
        Promotion::from_repository(
            Uuid::new_v4(),
            locale,
            "Weekend Special".to_string(),
            "Seeded by an admin".to_string(),
            10,
            "WEEKEND10".to_string(),
        )
    }

    #[tokio::test]
    async fn should_return_remote_records_unmodified_when_store_has_data() {
        for locale in Locale::ALL {
            let mut mock_repo = MockPromotionRepo::new();
            mock_repo
                .expect_get_by_locale()
                .returning(move |l| Ok(vec![remote_promotion(l)]));

            let use_case = GetPromotionsUseCaseImpl {
                repository: Arc::new(mock_repo),
                logger: mock_logger(),
            };

            let resolved = use_case.execute(GetPromotionsParams { locale }).await;

            assert_eq!(resolved.source, DataSource::Remote);
            assert!(resolved.using_remote_data());
            assert_eq!(resolved.records[0].title, "Weekend Special");
        }
    }

    #[tokio::test]
    async fn should_serve_fallback_without_error_flag_when_store_is_empty() {
        for locale in Locale::ALL {
            let mut mock_repo = MockPromotionRepo::new();
            mock_repo.expect_get_by_locale().returning(|_| Ok(vec![]));

            let use_case = GetPromotionsUseCaseImpl {
                repository: Arc::new(mock_repo),
                logger: mock_logger(),
            };

            let resolved = use_case.execute(GetPromotionsParams { locale }).await;

            assert_eq!(resolved.source, DataSource::FallbackAfterEmpty);
            assert!(!resolved.fetch_error());
            assert_eq!(resolved.records, fallback_promotions(locale));
        }
    }

    #[tokio::test]
    async fn should_serve_fallback_with_error_flag_when_query_fails() {
        for locale in Locale::ALL {
            let mut mock_repo = MockPromotionRepo::new();
            mock_repo
                .expect_get_by_locale()
                .returning(|_| Err(RepositoryError::Persistence));

            let use_case = GetPromotionsUseCaseImpl {
                repository: Arc::new(mock_repo),
                logger: mock_logger(),
            };

            let resolved = use_case.execute(GetPromotionsParams { locale }).await;

            assert_eq!(resolved.source, DataSource::FallbackAfterError);
            assert!(resolved.fetch_error());
            assert_eq!(resolved.records, fallback_promotions(locale));
        }
    }
}
