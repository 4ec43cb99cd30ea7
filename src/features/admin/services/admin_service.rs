use std::sync::Arc;

use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::admin::dtos::{AdminStatsDto, AdminUserDto};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::campaigns::dtos::CampaignDetailDto;
use crate::features::campaigns::models::CampaignWithBrand;
use crate::features::campaigns::services::CAMPAIGN_WITH_BRAND;
use crate::features::profiles::ProfileService;
use crate::shared::types::PaginationQuery;

/// Service for admin queries
pub struct AdminService {
    pool: PgPool,
    profiles: Arc<ProfileService>,
}

impl AdminService {
    pub fn new(pool: PgPool, profiles: Arc<ProfileService>) -> Self {
        Self { pool, profiles }
    }

    async fn require_admin(&self, user: &AuthenticatedUser) -> Result<()> {
        let admin = self.profiles.resolve_actor(user).await?.require_admin()?;
        tracing::debug!("Admin access granted: user_id={}", admin.user_id);
        Ok(())
    }

    pub async fn stats(&self, user: &AuthenticatedUser) -> Result<AdminStatsDto> {
        self.require_admin(user).await?;

        let (users, campaigns, applications) = tokio::try_join!(
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM profiles").fetch_one(&self.pool),
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM campaigns WHERE status = 'active'")
                .fetch_one(&self.pool),
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM applications")
                .fetch_one(&self.pool),
        )
        .map_err(|e| {
            tracing::error!("Failed to load admin stats: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(AdminStatsDto {
            users,
            campaigns,
            applications,
        })
    }

    /// List profiles, newest first
    pub async fn list_users(
        &self,
        user: &AuthenticatedUser,
        pagination: &PaginationQuery,
    ) -> Result<(Vec<AdminUserDto>, i64)> {
        self.require_admin(user).await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM profiles")
            .fetch_one(&self.pool)
            .await?;

        let items = sqlx::query_as::<_, AdminUserDto>(
            r#"
            SELECT p.id, p.user_id, p.email, p.role,
                   COALESCE(b.name, cr.name) AS name,
                   p.created_at
            FROM profiles p
            LEFT JOIN brands b ON b.user_id = p.user_id
            LEFT JOIN creators cr ON cr.user_id = p.user_id
            ORDER BY p.created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok((items, total))
    }

    /// List campaigns in every status, newest first
    pub async fn list_campaigns(
        &self,
        user: &AuthenticatedUser,
        pagination: &PaginationQuery,
    ) -> Result<(Vec<CampaignDetailDto>, i64)> {
        self.require_admin(user).await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM campaigns")
            .fetch_one(&self.pool)
            .await?;

        let sql = format!(
            "{} ORDER BY c.created_at DESC LIMIT $1 OFFSET $2",
            CAMPAIGN_WITH_BRAND
        );
        let rows = sqlx::query_as::<_, CampaignWithBrand>(&sql)
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(&self.pool)
            .await?;

        Ok((rows.into_iter().map(Into::into).collect(), total))
    }
}
