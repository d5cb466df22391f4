use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::promotion::model::Promotion;
use business::domain::promotion::repository::PromotionRepository;
use business::domain::shared::value_objects::Locale;

use super::entity::PromotionEntity;

pub struct PromotionRepositoryPostgres {
    pool: PgPool,
}

impl PromotionRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PromotionRepository for PromotionRepositoryPostgres {
    async fn get_by_locale(&self, locale: Locale) -> Result<Vec<Promotion>, RepositoryError> {
        let entities = sqlx::query_as::<_, PromotionEntity>(
            "SELECT id, locale, title, description, discount_percent, code FROM promotions WHERE locale = $1 ORDER BY discount_percent DESC, title",
        )
        .bind(locale.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn save(&self, promotion: &Promotion) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO promotions (id, locale, title, description, discount_percent, code)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                locale = EXCLUDED.locale,
                title = EXCLUDED.title,
                description = EXCLUDED.description,
                discount_percent = EXCLUDED.discount_percent,
                code = EXCLUDED.code"#,
        )
        .bind(promotion.id)
        .bind(promotion.locale.as_str())
        .bind(&promotion.title)
        .bind(&promotion.description)
        .bind(i32::from(promotion.discount_percent))
        .bind(&promotion.code)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM promotions")
            .fetch_one(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(count)
    }
}
