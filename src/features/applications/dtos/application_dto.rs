use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::applications::models::{
    Application, ApplicationStatus, ApplicationWithCampaign, ApplicationWithCreator,
};
use crate::features::campaigns::models::CampaignStatus;

/// Request DTO for applying to a campaign
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct ApplyDto {
    #[validate(length(max = 5000, message = "Pitch must not exceed 5000 characters"))]
    pub pitch: Option<String>,
}

/// Response DTO for application
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApplicationResponseDto {
    pub id: Uuid,
    pub campaign_id: Uuid,
    pub creator_id: Uuid,
    pub pitch: Option<String>,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Application> for ApplicationResponseDto {
    fn from(a: Application) -> Self {
        Self {
            id: a.id,
            campaign_id: a.campaign_id,
            creator_id: a.creator_id,
            pitch: a.pitch,
            status: a.status,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApplicationCampaignDto {
    pub id: Uuid,
    pub title: String,
    pub status: CampaignStatus,
    pub budget: Decimal,
    pub deadline: DateTime<Utc>,
    pub brand_id: Uuid,
    pub brand_name: String,
    pub brand_logo_url: Option<String>,
}

/// Creator's own application with its campaign
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MyApplicationDto {
    #[serde(flatten)]
    pub application: ApplicationResponseDto,
    pub campaign: ApplicationCampaignDto,
}

impl From<ApplicationWithCampaign> for MyApplicationDto {
    fn from(row: ApplicationWithCampaign) -> Self {
        Self {
            campaign: ApplicationCampaignDto {
                id: row.application.campaign_id,
                title: row.campaign_title,
                status: row.campaign_status,
                budget: row.campaign_budget,
                deadline: row.campaign_deadline,
                brand_id: row.brand_id,
                brand_name: row.brand_name,
                brand_logo_url: row.brand_logo_url,
            },
            application: row.application.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApplicantDto {
    pub id: Uuid,
    pub name: String,
    pub username: Option<String>,
    pub profile_pic_url: Option<String>,
    pub rating: Option<Decimal>,
    pub portfolio_url: Option<String>,
}

/// Application as seen by the campaign's brand
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CampaignApplicationDto {
    #[serde(flatten)]
    pub application: ApplicationResponseDto,
    pub creator: ApplicantDto,
}

impl From<ApplicationWithCreator> for CampaignApplicationDto {
    fn from(row: ApplicationWithCreator) -> Self {
        Self {
            creator: ApplicantDto {
                id: row.application.creator_id,
                name: row.creator_name,
                username: row.creator_username,
                profile_pic_url: row.creator_profile_pic_url,
                rating: row.creator_rating,
                portfolio_url: row.creator_portfolio_url,
            },
            application: row.application.into(),
        }
    }
}
