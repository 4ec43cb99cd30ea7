use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for creator
#[derive(Debug, Clone, FromRow)]
pub struct Creator {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub username: Option<String>,
    pub bio: Option<String>,
    pub profile_pic_url: Option<String>,
    pub niche_tags: Vec<String>,
    pub rating: Option<Decimal>,
    pub portfolio_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
