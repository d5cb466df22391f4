use sqlx::PgPool;
use tracing::info;

use business::domain::barber::catalog::fallback_barbers;
use business::domain::barber::repository::BarberRepository;
use business::domain::errors::RepositoryError;
use business::domain::promotion::catalog::fallback_promotions;
use business::domain::promotion::repository::PromotionRepository;
use business::domain::shared::value_objects::Locale;

use crate::barber::repository::BarberRepositoryPostgres;
use crate::promotion::repository::PromotionRepositoryPostgres;

/// One-shot seeding of the content collections with the locale-tagged
/// catalogs. Each collection is written only when it holds no records at
/// all, so re-running at every startup never duplicates rows.
pub async fn seed_locale_catalogs(pool: &PgPool) -> Result<(), RepositoryError> {
    seed_barbers(&BarberRepositoryPostgres::new(pool.clone())).await?;
    seed_promotions(&PromotionRepositoryPostgres::new(pool.clone())).await?;
    Ok(())
}

async fn seed_barbers(repository: &dyn BarberRepository) -> Result<(), RepositoryError> {
    if repository.count().await? > 0 {
        info!(target: "Halaq -- ", "Barbers collection already seeded");
        return Ok(());
    }

    let mut written = 0;
    for locale in Locale::ALL {
        for barber in fallback_barbers(locale) {
            repository.save(&barber).await?;
            written += 1;
        }
    }
    info!(target: "Halaq -- ", "Seeded {} barber records", written);
    Ok(())
}

async fn seed_promotions(repository: &dyn PromotionRepository) -> Result<(), RepositoryError> {
    if repository.count().await? > 0 {
        info!(target: "Halaq -- ", "Promotions collection already seeded");
        return Ok(());
    }

    let mut written = 0;
    for locale in Locale::ALL {
        for promotion in fallback_promotions(locale) {
            repository.save(&promotion).await?;
            written += 1;
        }
    }
    info!(target: "Halaq -- ", "Seeded {} promotion records", written);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::domain::barber::model::Barber;
    use std::sync::Mutex;

    /// In-memory repository double tracking saves and a fixed count.
    struct RecordingBarberRepo {
        existing: i64,
        saved: Mutex<Vec<Barber>>,
    }

    #[async_trait]
    impl BarberRepository for RecordingBarberRepo {
        async fn get_by_locale(&self, _locale: Locale) -> Result<Vec<Barber>, RepositoryError> {
            Ok(vec![])
        }

        async fn save(&self, barber: &Barber) -> Result<(), RepositoryError> {
            self.saved
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .push(barber.clone());
            Ok(())
        }

        async fn count(&self) -> Result<i64, RepositoryError> {
            Ok(self.existing)
        }
    }

    #[tokio::test]
    async fn should_seed_both_locales_when_collection_is_empty() {
        let repo = RecordingBarberRepo {
            existing: 0,
            saved: Mutex::new(vec![]),
        };

        seed_barbers(&repo).await.unwrap();

        let saved = repo.saved.lock().unwrap();
        let expected: usize = Locale::ALL
            .iter()
            .map(|l| fallback_barbers(*l).len())
            .sum();
        assert_eq!(saved.len(), expected);
        assert!(saved.iter().any(|b| b.locale == Locale::En));
        assert!(saved.iter().any(|b| b.locale == Locale::Ar));
    }

    #[tokio::test]
    async fn should_skip_seeding_when_collection_has_records() {
        let repo = RecordingBarberRepo {
            existing: 3,
            saved: Mutex::new(vec![]),
        };

        seed_barbers(&repo).await.unwrap();

        assert!(repo.saved.lock().unwrap().is_empty());
    }
}
