use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::profiles::models::{Brand, Creator, UserRole};
use crate::shared::validation::{validate_not_blank, validate_tags, USERNAME_REGEX};

/// Response DTO for brand
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BrandResponseDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub industry: Option<String>,
    pub bio: Option<String>,
    pub logo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Brand> for BrandResponseDto {
    fn from(b: Brand) -> Self {
        Self {
            id: b.id,
            user_id: b.user_id,
            name: b.name,
            industry: b.industry,
            bio: b.bio,
            logo_url: b.logo_url,
            created_at: b.created_at,
        }
    }
}

/// Response DTO for creator
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatorResponseDto {
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

impl From<Creator> for CreatorResponseDto {
    fn from(c: Creator) -> Self {
        Self {
            id: c.id,
            user_id: c.user_id,
            name: c.name,
            username: c.username,
            bio: c.bio,
            profile_pic_url: c.profile_pic_url,
            niche_tags: c.niche_tags,
            rating: c.rating,
            portfolio_url: c.portfolio_url,
            created_at: c.created_at,
        }
    }
}

/// Role-specific profile record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum RoleProfileDto {
    Brand(BrandResponseDto),
    Creator(CreatorResponseDto),
}

/// Response DTO for the caller's own profile
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponseDto {
    pub role: UserRole,
    pub email: String,
    /// Absent for admin profiles, which have no brand/creator record
    pub profile: Option<RoleProfileDto>,
}

/// Request DTO for updating the caller's own brand or creator record.
///
/// Fields that do not apply to the caller's role are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileDto {
    #[validate(
        length(max = 128, message = "Name must not exceed 128 characters"),
        custom(function = "validate_not_blank", message = "Name must not be blank")
    )]
    pub name: Option<String>,

    #[validate(length(max = 2000, message = "Bio must not exceed 2000 characters"))]
    pub bio: Option<String>,

    // Brand fields
    #[validate(length(max = 128, message = "Industry must not exceed 128 characters"))]
    pub industry: Option<String>,

    #[validate(url(message = "Logo URL must be a valid URL"))]
    pub logo_url: Option<String>,

    // Creator fields
    #[validate(
        length(min = 1, max = 64, message = "Username must be 1-64 characters"),
        regex(
            path = *USERNAME_REGEX,
            message = "Username must start with letter or underscore and contain only alphanumeric characters and underscores"
        )
    )]
    pub username: Option<String>,

    #[validate(url(message = "Profile picture URL must be a valid URL"))]
    pub profile_pic_url: Option<String>,

    #[validate(custom(function = "validate_tags"))]
    pub niche_tags: Option<Vec<String>>,

    #[validate(url(message = "Portfolio URL must be a valid URL"))]
    pub portfolio_url: Option<String>,
}

impl UpdateProfileDto {
    pub fn has_creator_fields(&self) -> bool {
        self.username.is_some()
            || self.profile_pic_url.is_some()
            || self.niche_tags.is_some()
            || self.portfolio_url.is_some()
    }

    pub fn has_brand_fields(&self) -> bool {
        self.industry.is_some() || self.logo_url.is_some()
    }
}
