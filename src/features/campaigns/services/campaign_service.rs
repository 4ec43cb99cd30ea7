use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::campaigns::dtos::{
    CampaignDetailDto, CampaignQuery, CampaignResponseDto, CreateCampaignDto, MyCampaignDto,
    UpdateCampaignDto,
};
use crate::features::campaigns::models::{
    Campaign, CampaignStatus, CampaignTransitionPolicy, CampaignWithBrand, CampaignWithCount,
    OwnedCampaign,
};
use crate::features::profiles::ProfileService;
use crate::shared::access;
use crate::shared::types::Meta;
use crate::shared::validation::{normalize_tags, parse_deadline};

pub(crate) const CAMPAIGN_WITH_BRAND: &str = r#"
    SELECT c.*,
           b.name AS brand_name,
           b.logo_url AS brand_logo_url,
           b.industry AS brand_industry,
           b.bio AS brand_bio,
           (SELECT COUNT(*) FROM applications a WHERE a.campaign_id = c.id) AS application_count
    FROM campaigns c
    JOIN brands b ON b.id = c.brand_id
"#;

pub struct CampaignService {
    pool: PgPool,
    profiles: Arc<ProfileService>,
    policy: CampaignTransitionPolicy,
}

impl CampaignService {
    pub fn new(
        pool: PgPool,
        profiles: Arc<ProfileService>,
        policy: CampaignTransitionPolicy,
    ) -> Self {
        Self {
            pool,
            profiles,
            policy,
        }
    }

    /// Public listing, newest first
    pub async fn list(&self, query: &CampaignQuery) -> Result<(Vec<CampaignDetailDto>, Meta)> {
        let pagination = query.pagination();

        let sql = format!(
            r#"{}
            WHERE ($1::campaign_status IS NULL OR c.status = $1)
              AND ($2::content_type IS NULL OR c.content_type = $2)
            ORDER BY c.created_at DESC
            LIMIT $3 OFFSET $4
            "#,
            CAMPAIGN_WITH_BRAND
        );

        let rows = sqlx::query_as::<_, CampaignWithBrand>(&sql)
            .bind(query.status)
            .bind(query.content_type)
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(&self.pool)
            .await?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM campaigns c
            WHERE ($1::campaign_status IS NULL OR c.status = $1)
              AND ($2::content_type IS NULL OR c.content_type = $2)
            "#,
        )
        .bind(query.status)
        .bind(query.content_type)
        .fetch_one(&self.pool)
        .await?;

        let items = rows.into_iter().map(CampaignDetailDto::summary).collect();
        Ok((items, pagination.meta(total)))
    }

    pub async fn get(&self, id: Uuid) -> Result<CampaignDetailDto> {
        let sql = format!("{} WHERE c.id = $1", CAMPAIGN_WITH_BRAND);

        let row = sqlx::query_as::<_, CampaignWithBrand>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Campaign not found".to_string()))?;

        Ok(row.into())
    }

    /// Load a campaign with the user id of its owning brand
    pub async fn find_owned(&self, id: Uuid) -> Result<Option<OwnedCampaign>> {
        let campaign = sqlx::query_as::<_, OwnedCampaign>(
            r#"
            SELECT c.*, b.user_id AS owner_user_id
            FROM campaigns c
            JOIN brands b ON b.id = c.brand_id
            WHERE c.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(campaign)
    }

    pub async fn create(
        &self,
        user: &AuthenticatedUser,
        dto: CreateCampaignDto,
    ) -> Result<CampaignResponseDto> {
        let brand = self
            .profiles
            .resolve_actor(user)
            .await?
            .require_brand("Only brands can create campaigns")?;

        let deadline = parse_deadline(&dto.deadline).ok_or_else(|| {
            AppError::Validation(vec![
                "deadline: Deadline must be an ISO-8601 date or date-time".to_string(),
            ])
        })?;

        let campaign = sqlx::query_as::<_, Campaign>(
            r#"
            INSERT INTO campaigns (
                brand_id, title, description, budget, deadline,
                content_type, status, num_creators, niche_tags
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(brand.id)
        .bind(dto.title.trim())
        .bind(dto.description.trim())
        .bind(dto.budget)
        .bind(deadline)
        .bind(dto.content_type)
        .bind(dto.status.unwrap_or(CampaignStatus::Active))
        .bind(dto.num_creators.unwrap_or(1))
        .bind(normalize_tags(dto.niche_tags.unwrap_or_default()))
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(
            "Campaign created: id={}, brand_id={}, status={}",
            campaign.id,
            brand.id,
            campaign.status
        );

        Ok(campaign.into())
    }

    /// Partial update by the owning brand. Status changes go through the
    /// configured transition policy; the write only lands if the status is
    /// still the one that was checked.
    pub async fn update(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
        dto: UpdateCampaignDto,
    ) -> Result<CampaignResponseDto> {
        self.profiles
            .resolve_actor(user)
            .await?
            .require_brand("Only brands can update campaigns")?;

        let owned = access::enforce(
            self.find_owned(id).await?,
            "Campaign",
            user.id,
            |c| c.owner_user_id,
            |c| match dto.status {
                Some(next) => self.policy.check(c.campaign.status, next),
                None => Ok(()),
            },
        )?;
        let current = owned.campaign.status;

        let deadline = match dto.deadline.as_deref() {
            Some(raw) => Some(parse_deadline(raw).ok_or_else(|| {
                AppError::Validation(vec![
                    "deadline: Deadline must be an ISO-8601 date or date-time".to_string(),
                ])
            })?),
            None => None,
        };

        let campaign = sqlx::query_as::<_, Campaign>(
            r#"
            UPDATE campaigns SET
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                budget = COALESCE($5, budget),
                deadline = COALESCE($6, deadline),
                content_type = COALESCE($7, content_type),
                num_creators = COALESCE($8, num_creators),
                niche_tags = COALESCE($9, niche_tags),
                status = COALESCE($10, status),
                updated_at = NOW()
            WHERE id = $1 AND status = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(current)
        .bind(dto.title.map(|t| t.trim().to_string()))
        .bind(dto.description.map(|d| d.trim().to_string()))
        .bind(dto.budget)
        .bind(deadline)
        .bind(dto.content_type)
        .bind(dto.num_creators)
        .bind(dto.niche_tags.map(normalize_tags))
        .bind(dto.status)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            AppError::InvalidState("Campaign status changed while updating".to_string())
        })?;

        if campaign.status != current {
            tracing::info!(
                "Campaign status changed: id={}, {} -> {}",
                campaign.id,
                current,
                campaign.status
            );
        } else {
            tracing::info!("Campaign updated: id={}", campaign.id);
        }

        Ok(campaign.into())
    }

    /// The calling brand's own campaigns, newest first
    pub async fn list_mine(&self, user: &AuthenticatedUser) -> Result<Vec<MyCampaignDto>> {
        let brand = self
            .profiles
            .resolve_actor(user)
            .await?
            .require_brand("Only brands have campaigns")?;

        let rows = sqlx::query_as::<_, CampaignWithCount>(
            r#"
            SELECT c.*,
                   (SELECT COUNT(*) FROM applications a WHERE a.campaign_id = c.id) AS application_count
            FROM campaigns c
            WHERE c.brand_id = $1
            ORDER BY c.created_at DESC
            "#,
        )
        .bind(brand.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
