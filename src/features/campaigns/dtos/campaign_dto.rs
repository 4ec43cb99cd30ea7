use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::features::campaigns::models::{
    Campaign, CampaignStatus, CampaignWithBrand, CampaignWithCount, ContentType,
};
use crate::shared::constants::{BUDGET_LIMIT, BUDGET_SCALE, DEFAULT_PAGE_SIZE};
use crate::shared::types::PaginationQuery;
use crate::shared::validation::{validate_deadline, validate_not_blank, validate_tags};

fn validate_budget(budget: &Decimal) -> Result<(), ValidationError> {
    if *budget < Decimal::ZERO {
        let mut err = ValidationError::new("negative_budget");
        err.message = Some("Budget must be zero or greater".into());
        return Err(err);
    }
    if budget.normalize().scale() > BUDGET_SCALE {
        let mut err = ValidationError::new("budget_precision");
        err.message = Some(
            format!("Budget must have at most {} decimal places", BUDGET_SCALE).into(),
        );
        return Err(err);
    }
    if *budget >= Decimal::from(BUDGET_LIMIT) {
        let mut err = ValidationError::new("budget_too_large");
        err.message = Some(format!("Budget must be less than {}", BUDGET_LIMIT).into());
        return Err(err);
    }
    Ok(())
}

fn validate_initial_status(status: &CampaignStatus) -> Result<(), ValidationError> {
    match status {
        CampaignStatus::Draft | CampaignStatus::Active => Ok(()),
        _ => {
            let mut err = ValidationError::new("initial_status");
            err.message = Some("New campaigns start as draft or active".into());
            Err(err)
        }
    }
}

/// Query parameters for the public campaign listing
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
pub struct CampaignQuery {
    /// Page number (1-indexed, default: 1)
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "page must be at least 1"))]
    #[param(minimum = 1)]
    pub page: i64,

    /// Number of items per page (default: 10, max: 100)
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    #[param(minimum = 1, maximum = 100)]
    pub limit: i64,

    pub status: Option<CampaignStatus>,

    pub content_type: Option<ContentType>,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl CampaignQuery {
    pub fn pagination(&self) -> PaginationQuery {
        PaginationQuery::new(self.page, self.limit)
    }
}

/// Request DTO for creating a campaign
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCampaignDto {
    #[validate(
        length(max = 200, message = "Title must not exceed 200 characters"),
        custom(function = "validate_not_blank", message = "Title is required")
    )]
    pub title: String,

    #[validate(
        length(max = 10000, message = "Description must not exceed 10000 characters"),
        custom(function = "validate_not_blank", message = "Description is required")
    )]
    pub description: String,

    #[validate(custom(function = "validate_budget"))]
    pub budget: Decimal,

    /// ISO-8601 date (`2025-03-01`) or RFC-3339 date-time
    #[validate(custom(
        function = "validate_deadline",
        message = "Deadline must be an ISO-8601 date or date-time"
    ))]
    pub deadline: String,

    pub content_type: ContentType,

    #[validate(range(min = 1, message = "At least one creator is required"))]
    pub num_creators: Option<i32>,

    #[validate(custom(function = "validate_tags"))]
    pub niche_tags: Option<Vec<String>>,

    /// `draft` or `active` (default)
    #[validate(custom(function = "validate_initial_status"))]
    pub status: Option<CampaignStatus>,
}

/// Request DTO for a partial campaign update
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCampaignDto {
    #[validate(
        length(max = 200, message = "Title must not exceed 200 characters"),
        custom(function = "validate_not_blank", message = "Title must not be blank")
    )]
    pub title: Option<String>,

    #[validate(
        length(max = 10000, message = "Description must not exceed 10000 characters"),
        custom(function = "validate_not_blank", message = "Description must not be blank")
    )]
    pub description: Option<String>,

    #[validate(custom(function = "validate_budget"))]
    pub budget: Option<Decimal>,

    #[validate(custom(
        function = "validate_deadline",
        message = "Deadline must be an ISO-8601 date or date-time"
    ))]
    pub deadline: Option<String>,

    pub content_type: Option<ContentType>,

    #[validate(range(min = 1, message = "At least one creator is required"))]
    pub num_creators: Option<i32>,

    #[validate(custom(function = "validate_tags"))]
    pub niche_tags: Option<Vec<String>>,

    pub status: Option<CampaignStatus>,
}

/// Response DTO for campaign
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CampaignResponseDto {
    pub id: Uuid,
    pub brand_id: Uuid,
    pub title: String,
    pub description: String,
    pub budget: Decimal,
    pub deadline: DateTime<Utc>,
    pub content_type: ContentType,
    pub status: CampaignStatus,
    pub num_creators: i32,
    pub niche_tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Campaign> for CampaignResponseDto {
    fn from(c: Campaign) -> Self {
        Self {
            id: c.id,
            brand_id: c.brand_id,
            title: c.title,
            description: c.description,
            budget: c.budget,
            deadline: c.deadline,
            content_type: c.content_type,
            status: c.status,
            num_creators: c.num_creators,
            niche_tags: c.niche_tags,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Brand summary embedded in campaign listings
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BrandSummaryDto {
    pub id: Uuid,
    pub name: String,
    pub logo_url: Option<String>,
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Campaign with brand summary and application count
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CampaignDetailDto {
    #[serde(flatten)]
    pub campaign: CampaignResponseDto,
    pub brand: BrandSummaryDto,
    pub application_count: i64,
}

impl CampaignDetailDto {
    /// Listing form: the brand bio is only included on the detail view
    pub fn summary(row: CampaignWithBrand) -> Self {
        let mut dto = Self::from(row);
        dto.brand.bio = None;
        dto
    }
}

impl From<CampaignWithBrand> for CampaignDetailDto {
    fn from(row: CampaignWithBrand) -> Self {
        Self {
            brand: BrandSummaryDto {
                id: row.campaign.brand_id,
                name: row.brand_name,
                logo_url: row.brand_logo_url,
                industry: row.brand_industry,
                bio: row.brand_bio,
            },
            application_count: row.application_count,
            campaign: row.campaign.into(),
        }
    }
}

/// Brand's own campaign with its application count
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MyCampaignDto {
    #[serde(flatten)]
    pub campaign: CampaignResponseDto,
    pub application_count: i64,
}

impl From<CampaignWithCount> for MyCampaignDto {
    fn from(row: CampaignWithCount) -> Self {
        Self {
            application_count: row.application_count,
            campaign: row.campaign.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::lorem::en::{Paragraph, Sentence};
    use fake::Fake;
    use std::str::FromStr;

    fn create_dto() -> CreateCampaignDto {
        CreateCampaignDto {
            title: Sentence(3..6).fake(),
            description: Paragraph(1..3).fake(),
            budget: Decimal::from_str("1500.50").unwrap(),
            deadline: "2030-06-30".to_string(),
            content_type: ContentType::Video,
            num_creators: Some(3),
            niche_tags: Some(vec!["tech".to_string()]),
            status: None,
        }
    }

    #[test]
    fn test_budget_must_fit_storage() {
        let fractional = CreateCampaignDto {
            budget: Decimal::from_str("12.345").unwrap(),
            ..create_dto()
        };
        let errors = fractional.validate().unwrap_err();
        let field = &errors.field_errors()["budget"][0];
        assert_eq!(field.code, "budget_precision");

        let huge = CreateCampaignDto {
            budget: Decimal::from_str("99999999999").unwrap(),
            ..create_dto()
        };
        let errors = huge.validate().unwrap_err();
        assert_eq!(errors.field_errors()["budget"][0].code, "budget_too_large");

        let ceiling = CreateCampaignDto {
            budget: Decimal::from_str("9999999999.99").unwrap(),
            ..create_dto()
        };
        assert!(ceiling.validate().is_ok());

        let update = UpdateCampaignDto {
            budget: Some(Decimal::from_str("0.001").unwrap()),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn test_create_campaign_validation() {
        assert!(create_dto().validate().is_ok());

        let negative = CreateCampaignDto {
            budget: Decimal::from_str("-0.01").unwrap(),
            ..create_dto()
        };
        assert!(negative.validate().is_err());

        let free = CreateCampaignDto {
            budget: Decimal::ZERO,
            ..create_dto()
        };
        assert!(free.validate().is_ok());

        let padded = CreateCampaignDto {
            budget: Decimal::from_str("1500.500").unwrap(),
            ..create_dto()
        };
        assert!(padded.validate().is_ok());

        let bad_deadline = CreateCampaignDto {
            deadline: "next friday".to_string(),
            ..create_dto()
        };
        assert!(bad_deadline.validate().is_err());

        let no_creators = CreateCampaignDto {
            num_creators: Some(0),
            ..create_dto()
        };
        assert!(no_creators.validate().is_err());

        let completed = CreateCampaignDto {
            status: Some(CampaignStatus::Completed),
            ..create_dto()
        };
        assert!(completed.validate().is_err());

        let draft = CreateCampaignDto {
            status: Some(CampaignStatus::Draft),
            ..create_dto()
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_budget_accepts_number_or_string() {
        let body = serde_json::json!({
            "title": "Launch",
            "description": "Unboxing video",
            "budget": 250.75,
            "deadline": "2030-01-01T00:00:00Z",
            "content_type": "image"
        });
        let dto: CreateCampaignDto = serde_json::from_value(body).unwrap();
        assert_eq!(dto.budget, Decimal::from_str("250.75").unwrap());

        let body = serde_json::json!({
            "title": "Launch",
            "description": "Unboxing video",
            "budget": "99.99",
            "deadline": "2030-01-01",
            "content_type": "both"
        });
        let dto: CreateCampaignDto = serde_json::from_value(body).unwrap();
        assert_eq!(dto.budget, Decimal::from_str("99.99").unwrap());
    }

    #[test]
    fn test_query_validation() {
        let query: CampaignQuery =
            serde_json::from_value(serde_json::json!({ "page": 2, "limit": 100, "status": "active" }))
                .unwrap();
        assert!(query.validate().is_ok());
        assert_eq!(query.pagination().offset(), 100);
        assert_eq!(query.status, Some(CampaignStatus::Active));

        let query: CampaignQuery = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!((query.page, query.limit), (1, DEFAULT_PAGE_SIZE));

        let query: CampaignQuery =
            serde_json::from_value(serde_json::json!({ "limit": 101 })).unwrap();
        assert!(query.validate().is_err());

        let query: CampaignQuery = serde_json::from_value(serde_json::json!({ "page": 0 })).unwrap();
        assert!(query.validate().is_err());

        assert!(
            serde_json::from_value::<CampaignQuery>(serde_json::json!({ "status": "archived" }))
                .is_err()
        );
    }
}
