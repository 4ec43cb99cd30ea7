use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::campaigns::models::CampaignStatus;
use crate::shared::lifecycle::Lifecycle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "application_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Applied,
    Accepted,
    Rejected,
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplicationStatus::Applied => write!(f, "applied"),
            ApplicationStatus::Accepted => write!(f, "accepted"),
            ApplicationStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl Lifecycle for ApplicationStatus {
    const ENTITY: &'static str = "Application";

    fn successors(self) -> &'static [Self] {
        match self {
            ApplicationStatus::Applied => {
                &[ApplicationStatus::Accepted, ApplicationStatus::Rejected]
            }
            ApplicationStatus::Accepted | ApplicationStatus::Rejected => &[],
        }
    }
}

/// Database model for application
#[derive(Debug, Clone, FromRow)]
pub struct Application {
    pub id: Uuid,
    pub campaign_id: Uuid,
    pub creator_id: Uuid,
    pub pitch: Option<String>,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Application with what a status review needs: the parent campaign's status
/// and the user id of the brand owning that campaign
#[derive(Debug, Clone, FromRow)]
pub struct ReviewableApplication {
    #[sqlx(flatten)]
    pub application: Application,
    pub campaign_status: CampaignStatus,
    pub owner_user_id: Uuid,
}

/// Application with the user id of the creator who wrote it
#[derive(Debug, Clone, FromRow)]
pub struct AuthoredApplication {
    #[sqlx(flatten)]
    pub application: Application,
    pub author_user_id: Uuid,
}

/// Creator's application joined with its campaign and brand
#[derive(Debug, Clone, FromRow)]
pub struct ApplicationWithCampaign {
    #[sqlx(flatten)]
    pub application: Application,
    pub campaign_title: String,
    pub campaign_status: CampaignStatus,
    pub campaign_budget: Decimal,
    pub campaign_deadline: DateTime<Utc>,
    pub brand_id: Uuid,
    pub brand_name: String,
    pub brand_logo_url: Option<String>,
}

/// Campaign application joined with the applicant's public creator fields
#[derive(Debug, Clone, FromRow)]
pub struct ApplicationWithCreator {
    #[sqlx(flatten)]
    pub application: Application,
    pub creator_name: String,
    pub creator_username: Option<String>,
    pub creator_profile_pic_url: Option<String>,
    pub creator_rating: Option<Decimal>,
    pub creator_portfolio_url: Option<String>,
}
