use poem_openapi::Object;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::review::model::Review;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ReviewResponse {
    /// Review unique identifier
    pub id: Uuid,
    /// Reviewer display name
    pub author: String,
    /// 1 to 5 stars
    pub rating: u8,
    /// Review text
    pub comment: String,
}

impl From<Review> for ReviewResponse {
    fn from(r: Review) -> Self {
        Self {
            id: r.id,
            author: r.author,
            rating: r.rating,
            comment: r.comment,
        }
    }
}
