use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for brand
#[derive(Debug, Clone, FromRow)]
pub struct Brand {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub industry: Option<String>,
    pub bio: Option<String>,
    pub logo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
