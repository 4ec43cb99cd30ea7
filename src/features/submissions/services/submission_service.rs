use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::applications::models::{ApplicationStatus, AuthoredApplication};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::profiles::{Actor, ProfileService};
use crate::features::submissions::dtos::{
    CreateSubmissionDto, SubmissionListItemDto, SubmissionResponseDto,
};
use crate::features::submissions::models::{
    ReviewableSubmission, Submission, SubmissionStatus, SubmissionWithContext,
};
use crate::shared::access;
use crate::shared::lifecycle::{ensure_status, ensure_transition};

const LIST_SELECT: &str = r#"
    SELECT s.*,
           c.id AS campaign_id,
           c.title AS campaign_title,
           cr.id AS creator_id,
           cr.name AS creator_name
    FROM submissions s
    JOIN applications a ON a.id = s.application_id
    JOIN campaigns c ON c.id = a.campaign_id
    JOIN creators cr ON cr.id = a.creator_id
"#;

pub struct SubmissionService {
    pool: PgPool,
    profiles: Arc<ProfileService>,
}

impl SubmissionService {
    pub fn new(pool: PgPool, profiles: Arc<ProfileService>) -> Self {
        Self { pool, profiles }
    }

    /// Submit a deliverable against the caller's own accepted application
    pub async fn create(
        &self,
        user: &AuthenticatedUser,
        dto: CreateSubmissionDto,
    ) -> Result<SubmissionResponseDto> {
        self.profiles
            .resolve_actor(user)
            .await?
            .require_creator("Only creators can submit")?;

        let application = sqlx::query_as::<_, AuthoredApplication>(
            r#"
            SELECT a.*, cr.user_id AS author_user_id
            FROM applications a
            JOIN creators cr ON cr.id = a.creator_id
            WHERE a.id = $1
            "#,
        )
        .bind(dto.application_id)
        .fetch_optional(&self.pool)
        .await?;

        access::enforce(
            application,
            "Application",
            user.id,
            |a| a.author_user_id,
            |a| {
                ensure_status(
                    a.application.status,
                    ApplicationStatus::Accepted,
                    "Application must be accepted first",
                )
            },
        )?;

        let description = dto
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        let submission = sqlx::query_as::<_, Submission>(
            r#"
            INSERT INTO submissions (application_id, file_url, description, status)
            VALUES ($1, $2, $3, 'submitted')
            RETURNING *
            "#,
        )
        .bind(dto.application_id)
        .bind(&dto.file_url)
        .bind(description)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(
            "Submission created: id={}, application_id={}",
            submission.id,
            submission.application_id
        );

        Ok(submission.into())
    }

    /// Brands see submissions to their campaigns, creators their own.
    /// Anyone else gets an empty list.
    pub async fn list(&self, user: &AuthenticatedUser) -> Result<Vec<SubmissionListItemDto>> {
        let rows = match self.profiles.resolve_actor(user).await? {
            Actor::Brand(brand) => {
                sqlx::query_as::<_, SubmissionWithContext>(&format!(
                    "{} WHERE c.brand_id = $1 ORDER BY s.created_at DESC",
                    LIST_SELECT
                ))
                .bind(brand.id)
                .fetch_all(&self.pool)
                .await?
            }
            Actor::Creator(creator) => {
                sqlx::query_as::<_, SubmissionWithContext>(&format!(
                    "{} WHERE a.creator_id = $1 ORDER BY s.created_at DESC",
                    LIST_SELECT
                ))
                .bind(creator.id)
                .fetch_all(&self.pool)
                .await?
            }
            Actor::Admin(_) | Actor::Anonymous => Vec::new(),
        };

        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn approve(&self, user: &AuthenticatedUser, id: Uuid) -> Result<SubmissionResponseDto> {
        self.review(user, id, SubmissionStatus::Approved).await
    }

    pub async fn reject(&self, user: &AuthenticatedUser, id: Uuid) -> Result<SubmissionResponseDto> {
        self.review(user, id, SubmissionStatus::Rejected).await
    }

    /// Move a submitted deliverable to `target`, as the brand owning the
    /// campaign it was made for.
    async fn review(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
        target: SubmissionStatus,
    ) -> Result<SubmissionResponseDto> {
        self.profiles
            .resolve_actor(user)
            .await?
            .require_brand("Only brands can review submissions")?;

        let submission = sqlx::query_as::<_, ReviewableSubmission>(
            r#"
            SELECT s.*, b.user_id AS owner_user_id
            FROM submissions s
            JOIN applications a ON a.id = s.application_id
            JOIN campaigns c ON c.id = a.campaign_id
            JOIN brands b ON b.id = c.brand_id
            WHERE s.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        access::enforce(
            submission,
            "Submission",
            user.id,
            |s| s.owner_user_id,
            |s| ensure_transition(s.submission.status, target),
        )?;

        let submission = sqlx::query_as::<_, Submission>(
            r#"
            UPDATE submissions
            SET status = $2, updated_at = NOW()
            WHERE id = $1 AND status = 'submitted'
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(target)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            AppError::InvalidState("Submission status changed during review".to_string())
        })?;

        tracing::info!("Submission {}: id={}", target, submission.id);

        Ok(submission.into())
    }
}
