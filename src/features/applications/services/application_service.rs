use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{is_unique_violation, AppError, Result};
use crate::features::applications::dtos::{
    ApplicationResponseDto, ApplyDto, CampaignApplicationDto, MyApplicationDto,
};
use crate::features::applications::models::{
    Application, ApplicationStatus, ApplicationWithCampaign, ApplicationWithCreator,
    ReviewableApplication,
};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::campaigns::models::CampaignStatus;
use crate::features::campaigns::CampaignService;
use crate::features::profiles::ProfileService;
use crate::shared::access;
use crate::shared::lifecycle::{ensure_status, ensure_transition};

const ALREADY_APPLIED: &str = "Already applied to this campaign";
const CAMPAIGN_NOT_ACTIVE: &str = "Campaign is not active";

pub struct ApplicationService {
    pool: PgPool,
    profiles: Arc<ProfileService>,
    campaigns: Arc<CampaignService>,
}

impl ApplicationService {
    pub fn new(
        pool: PgPool,
        profiles: Arc<ProfileService>,
        campaigns: Arc<CampaignService>,
    ) -> Self {
        Self {
            pool,
            profiles,
            campaigns,
        }
    }

    /// Apply to an active campaign as a creator.
    ///
    /// The explicit duplicate check gives the friendly error; the unique
    /// constraint on (campaign_id, creator_id) decides concurrent attempts.
    pub async fn apply(
        &self,
        user: &AuthenticatedUser,
        campaign_id: Uuid,
        dto: ApplyDto,
    ) -> Result<ApplicationResponseDto> {
        let creator = self
            .profiles
            .resolve_actor(user)
            .await?
            .require_creator("Only creators can apply to campaigns")?;

        let campaign = self
            .campaigns
            .find_owned(campaign_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Campaign not found".to_string()))?;
        ensure_status(
            campaign.campaign.status,
            CampaignStatus::Active,
            CAMPAIGN_NOT_ACTIVE,
        )?;

        let existing: Option<Uuid> = sqlx::query_scalar(
            "SELECT id FROM applications WHERE campaign_id = $1 AND creator_id = $2",
        )
        .bind(campaign_id)
        .bind(creator.id)
        .fetch_optional(&self.pool)
        .await?;
        if existing.is_some() {
            return Err(AppError::InvalidState(ALREADY_APPLIED.to_string()));
        }

        let pitch = dto
            .pitch
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        // The share lock holds off a concurrent status change until the
        // insert commits; a campaign closed in the meantime yields no row.
        let application = sqlx::query_as::<_, Application>(
            r#"
            WITH open_campaign AS (
                SELECT id FROM campaigns
                WHERE id = $1 AND status = 'active'
                FOR SHARE
            )
            INSERT INTO applications (campaign_id, creator_id, pitch, status)
            SELECT id, $2, $3, 'applied' FROM open_campaign
            RETURNING *
            "#,
        )
        .bind(campaign_id)
        .bind(creator.id)
        .bind(pitch)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                tracing::debug!(
                    "Concurrent duplicate application: campaign_id={}, creator_id={}",
                    campaign_id,
                    creator.id
                );
            }
            AppError::from_unique_violation(e, ALREADY_APPLIED)
        })?
        .ok_or_else(|| AppError::InvalidState(CAMPAIGN_NOT_ACTIVE.to_string()))?;

        tracing::info!(
            "Application created: id={}, campaign_id={}, creator_id={}",
            application.id,
            campaign_id,
            creator.id
        );

        Ok(application.into())
    }

    async fn find_reviewable(&self, id: Uuid) -> Result<Option<ReviewableApplication>> {
        let application = sqlx::query_as::<_, ReviewableApplication>(
            r#"
            SELECT a.*, c.status AS campaign_status, b.user_id AS owner_user_id
            FROM applications a
            JOIN campaigns c ON c.id = a.campaign_id
            JOIN brands b ON b.id = c.brand_id
            WHERE a.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(application)
    }

    /// Accept an application. Only the brand owning the campaign may do so,
    /// only from `applied`, and only while the campaign is still active.
    pub async fn accept(&self, user: &AuthenticatedUser, id: Uuid) -> Result<ApplicationResponseDto> {
        self.profiles
            .resolve_actor(user)
            .await?
            .require_brand("Only brands can accept applications")?;

        access::enforce(
            self.find_reviewable(id).await?,
            "Application",
            user.id,
            |a| a.owner_user_id,
            |a| {
                ensure_transition(a.application.status, ApplicationStatus::Accepted)?;
                ensure_status(a.campaign_status, CampaignStatus::Active, CAMPAIGN_NOT_ACTIVE)
            },
        )?;

        // Both conditions are re-checked in the write itself
        let application = sqlx::query_as::<_, Application>(
            r#"
            UPDATE applications a
            SET status = 'accepted', updated_at = NOW()
            FROM campaigns c
            WHERE a.id = $1
              AND a.status = 'applied'
              AND c.id = a.campaign_id
              AND c.status = 'active'
            RETURNING a.*
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            AppError::InvalidState(
                "Application or campaign status changed while accepting".to_string(),
            )
        })?;

        tracing::info!(
            "Application accepted: id={}, campaign_id={}",
            application.id,
            application.campaign_id
        );

        Ok(application.into())
    }

    /// Reject an application still in `applied`. Allowed whatever the
    /// campaign's status.
    pub async fn reject(&self, user: &AuthenticatedUser, id: Uuid) -> Result<ApplicationResponseDto> {
        self.profiles
            .resolve_actor(user)
            .await?
            .require_brand("Only brands can reject applications")?;

        access::enforce(
            self.find_reviewable(id).await?,
            "Application",
            user.id,
            |a| a.owner_user_id,
            |a| ensure_transition(a.application.status, ApplicationStatus::Rejected),
        )?;

        let application = sqlx::query_as::<_, Application>(
            r#"
            UPDATE applications
            SET status = 'rejected', updated_at = NOW()
            WHERE id = $1 AND status = 'applied'
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            AppError::InvalidState("Application status changed while rejecting".to_string())
        })?;

        tracing::info!(
            "Application rejected: id={}, campaign_id={}",
            application.id,
            application.campaign_id
        );

        Ok(application.into())
    }

    /// The calling creator's applications, newest first
    pub async fn list_mine(&self, user: &AuthenticatedUser) -> Result<Vec<MyApplicationDto>> {
        let creator = self
            .profiles
            .resolve_actor(user)
            .await?
            .require_creator("Only creators have applications")?;

        let rows = sqlx::query_as::<_, ApplicationWithCampaign>(
            r#"
            SELECT a.*,
                   c.title AS campaign_title,
                   c.status AS campaign_status,
                   c.budget AS campaign_budget,
                   c.deadline AS campaign_deadline,
                   b.id AS brand_id,
                   b.name AS brand_name,
                   b.logo_url AS brand_logo_url
            FROM applications a
            JOIN campaigns c ON c.id = a.campaign_id
            JOIN brands b ON b.id = c.brand_id
            WHERE a.creator_id = $1
            ORDER BY a.created_at DESC
            "#,
        )
        .bind(creator.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Applications to a campaign, visible only to the owning brand
    pub async fn list_for_campaign(
        &self,
        user: &AuthenticatedUser,
        campaign_id: Uuid,
    ) -> Result<Vec<CampaignApplicationDto>> {
        self.profiles
            .resolve_actor(user)
            .await?
            .require_brand("Only brands can view campaign applications")?;

        access::enforce(
            self.campaigns.find_owned(campaign_id).await?,
            "Campaign",
            user.id,
            |c| c.owner_user_id,
            access::any_state,
        )?;

        let rows = sqlx::query_as::<_, ApplicationWithCreator>(
            r#"
            SELECT a.*,
                   cr.name AS creator_name,
                   cr.username AS creator_username,
                   cr.profile_pic_url AS creator_profile_pic_url,
                   cr.rating AS creator_rating,
                   cr.portfolio_url AS creator_portfolio_url
            FROM applications a
            JOIN creators cr ON cr.id = a.creator_id
            WHERE a.campaign_id = $1
            ORDER BY a.created_at DESC
            "#,
        )
        .bind(campaign_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
