use async_trait::async_trait;

use crate::domain::review::model::Review;
use crate::domain::shared::value_objects::Locale;

pub struct GetReviewsParams {
    pub locale: Locale,
}

#[async_trait]
pub trait GetReviewsUseCase: Send + Sync {
    async fn execute(&self, params: GetReviewsParams) -> Vec<Review>;
}
