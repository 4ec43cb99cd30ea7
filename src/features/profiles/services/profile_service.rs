use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::dto::{OnboardingRequestDto, OnboardingRole};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::profiles::actor::Actor;
use crate::features::profiles::dtos::{ProfileResponseDto, RoleProfileDto, UpdateProfileDto};
use crate::features::profiles::models::{Brand, Creator, Profile, UserRole};
use crate::shared::validation::normalize_tags;

const ALREADY_ONBOARDED: &str = "User already has a profile. Onboarding can only be done once.";

/// Role/profile lookup and profile ownership operations
pub struct ProfileService {
    pool: PgPool,
}

impl ProfileService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_profile(&self, user_id: Uuid) -> Result<Option<Profile>> {
        let profile =
            sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE user_id = $1 LIMIT 1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(profile)
    }

    async fn find_brand(&self, user_id: Uuid) -> Result<Option<Brand>> {
        let brand = sqlx::query_as::<_, Brand>("SELECT * FROM brands WHERE user_id = $1 LIMIT 1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(brand)
    }

    async fn find_creator(&self, user_id: Uuid) -> Result<Option<Creator>> {
        let creator =
            sqlx::query_as::<_, Creator>("SELECT * FROM creators WHERE user_id = $1 LIMIT 1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(creator)
    }

    /// Resolve what the identity may act as.
    ///
    /// An identity without a profile is `Anonymous`, not an error. A profile
    /// whose role record is missing is reported and treated the same way.
    pub async fn resolve_actor(&self, user: &AuthenticatedUser) -> Result<Actor> {
        match self.find_profile(user.id).await? {
            Some(profile) => self.actor_for(profile).await,
            None => Ok(Actor::Anonymous),
        }
    }

    async fn actor_for(&self, profile: Profile) -> Result<Actor> {
        let user_id = profile.user_id;
        let actor = match profile.role {
            UserRole::Admin => Actor::Admin(profile),
            UserRole::Brand => match self.find_brand(user_id).await? {
                Some(brand) => Actor::Brand(brand),
                None => {
                    tracing::warn!("Profile {} has role brand but no brand record", profile.id);
                    Actor::Anonymous
                }
            },
            UserRole::Creator => match self.find_creator(user_id).await? {
                Some(creator) => Actor::Creator(creator),
                None => {
                    tracing::warn!(
                        "Profile {} has role creator but no creator record",
                        profile.id
                    );
                    Actor::Anonymous
                }
            },
        };

        Ok(actor)
    }

    /// Create the profile and its brand/creator record in one transaction.
    pub async fn onboard(
        &self,
        user: &AuthenticatedUser,
        dto: OnboardingRequestDto,
    ) -> Result<ProfileResponseDto> {
        if self.find_profile(user.id).await?.is_some() {
            return Err(AppError::InvalidState(ALREADY_ONBOARDED.to_string()));
        }

        let role = UserRole::from(dto.role);
        let name = dto.name.trim().to_string();

        let mut tx = self.pool.begin().await?;

        let profile = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles (user_id, role, email)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(user.id)
        .bind(role)
        .bind(&user.email)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::from_unique_violation(e, ALREADY_ONBOARDED))?;

        let record = match dto.role {
            OnboardingRole::Brand => {
                let brand = sqlx::query_as::<_, Brand>(
                    r#"
                    INSERT INTO brands (user_id, name, industry)
                    VALUES ($1, $2, $3)
                    RETURNING *
                    "#,
                )
                .bind(user.id)
                .bind(&name)
                .bind(&dto.industry)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| AppError::from_unique_violation(e, ALREADY_ONBOARDED))?;
                RoleProfileDto::Brand(brand.into())
            }
            OnboardingRole::Creator => {
                let creator = sqlx::query_as::<_, Creator>(
                    r#"
                    INSERT INTO creators (user_id, name, username, niche_tags)
                    VALUES ($1, $2, $3, $4)
                    RETURNING *
                    "#,
                )
                .bind(user.id)
                .bind(&name)
                .bind(&dto.username)
                .bind(normalize_tags(dto.niche_tags.unwrap_or_default()))
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| AppError::from_unique_violation(e, ALREADY_ONBOARDED))?;
                RoleProfileDto::Creator(creator.into())
            }
        };

        tx.commit().await?;

        tracing::info!("User onboarded: user_id={}, role={}", user.id, role);

        Ok(ProfileResponseDto {
            role: profile.role,
            email: profile.email,
            profile: Some(record),
        })
    }

    pub async fn get_own_profile(&self, user: &AuthenticatedUser) -> Result<ProfileResponseDto> {
        let profile = self
            .find_profile(user.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

        let role = profile.role;
        let email = profile.email.clone();
        let record = match self.actor_for(profile).await? {
            Actor::Brand(brand) => Some(RoleProfileDto::Brand(brand.into())),
            Actor::Creator(creator) => Some(RoleProfileDto::Creator(creator.into())),
            Actor::Admin(_) | Actor::Anonymous => None,
        };

        Ok(ProfileResponseDto {
            role,
            email,
            profile: record,
        })
    }

    /// Update the caller's own brand or creator record. The role never changes.
    pub async fn update_own_profile(
        &self,
        user: &AuthenticatedUser,
        dto: UpdateProfileDto,
    ) -> Result<ProfileResponseDto> {
        let actor = self.resolve_actor(user).await?;

        let (role, record) = match actor {
            Actor::Brand(_) => {
                if dto.has_creator_fields() {
                    return Err(AppError::BadRequest(
                        "Creator fields cannot be set on a brand profile".to_string(),
                    ));
                }
                let brand = sqlx::query_as::<_, Brand>(
                    r#"
                    UPDATE brands SET
                        name = COALESCE($2, name),
                        industry = COALESCE($3, industry),
                        bio = COALESCE($4, bio),
                        logo_url = COALESCE($5, logo_url),
                        updated_at = NOW()
                    WHERE user_id = $1
                    RETURNING *
                    "#,
                )
                .bind(user.id)
                .bind(dto.name.map(|n| n.trim().to_string()))
                .bind(dto.industry)
                .bind(dto.bio)
                .bind(dto.logo_url)
                .fetch_one(&self.pool)
                .await?;
                (UserRole::Brand, RoleProfileDto::Brand(brand.into()))
            }
            Actor::Creator(_) => {
                if dto.has_brand_fields() {
                    return Err(AppError::BadRequest(
                        "Brand fields cannot be set on a creator profile".to_string(),
                    ));
                }
                let creator = sqlx::query_as::<_, Creator>(
                    r#"
                    UPDATE creators SET
                        name = COALESCE($2, name),
                        username = COALESCE($3, username),
                        bio = COALESCE($4, bio),
                        profile_pic_url = COALESCE($5, profile_pic_url),
                        niche_tags = COALESCE($6, niche_tags),
                        portfolio_url = COALESCE($7, portfolio_url),
                        updated_at = NOW()
                    WHERE user_id = $1
                    RETURNING *
                    "#,
                )
                .bind(user.id)
                .bind(dto.name.map(|n| n.trim().to_string()))
                .bind(dto.username)
                .bind(dto.bio)
                .bind(dto.profile_pic_url)
                .bind(dto.niche_tags.map(normalize_tags))
                .bind(dto.portfolio_url)
                .fetch_one(&self.pool)
                .await?;
                (UserRole::Creator, RoleProfileDto::Creator(creator.into()))
            }
            Actor::Admin(_) | Actor::Anonymous => {
                return Err(AppError::Forbidden(
                    "Only brands and creators have an editable profile".to_string(),
                ))
            }
        };

        tracing::info!("Profile updated: user_id={}, role={}", user.id, role);

        Ok(ProfileResponseDto {
            role,
            email: user.email.clone(),
            profile: Some(record),
        })
    }
}
