use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::barber::model::Barber;
use business::domain::barber::repository::BarberRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::Locale;

use super::entity::BarberEntity;

pub struct BarberRepositoryPostgres {
    pool: PgPool,
}

impl BarberRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BarberRepository for BarberRepositoryPostgres {
    async fn get_by_locale(&self, locale: Locale) -> Result<Vec<Barber>, RepositoryError> {
        let entities = sqlx::query_as::<_, BarberEntity>(
            "SELECT id, locale, name, specialty, experience_years, bio FROM barbers WHERE locale = $1 ORDER BY experience_years DESC, name",
        )
        .bind(locale.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn save(&self, barber: &Barber) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO barbers (id, locale, name, specialty, experience_years, bio)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                locale = EXCLUDED.locale,
                name = EXCLUDED.name,
                specialty = EXCLUDED.specialty,
                experience_years = EXCLUDED.experience_years,
                bio = EXCLUDED.bio"#,
        )
        .bind(barber.id)
        .bind(barber.locale.as_str())
        .bind(&barber.name)
        .bind(&barber.specialty)
        .bind(i32::from(barber.experience_years))
        .bind(&barber.bio)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM barbers")
            .fetch_one(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(count)
    }
}
