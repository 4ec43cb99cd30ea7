use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::features::submissions::models::{Submission, SubmissionStatus, SubmissionWithContext};

/// Request DTO for submitting a deliverable
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSubmissionDto {
    pub application_id: Uuid,

    #[validate(url(message = "File URL must be a valid URL"))]
    pub file_url: String,

    #[validate(length(max = 2000, message = "Description must not exceed 2000 characters"))]
    pub description: Option<String>,
}

/// Response DTO for submission
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmissionResponseDto {
    pub id: Uuid,
    pub application_id: Uuid,
    pub file_url: String,
    pub description: Option<String>,
    pub status: SubmissionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Submission> for SubmissionResponseDto {
    fn from(s: Submission) -> Self {
        Self {
            id: s.id,
            application_id: s.application_id,
            file_url: s.file_url,
            description: s.description,
            status: s.status,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmissionCampaignDto {
    pub id: Uuid,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmissionCreatorDto {
    pub id: Uuid,
    pub name: String,
}

/// Submission listing entry with its campaign and creator
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmissionListItemDto {
    #[serde(flatten)]
    pub submission: SubmissionResponseDto,
    pub campaign: SubmissionCampaignDto,
    pub creator: SubmissionCreatorDto,
}

impl From<SubmissionWithContext> for SubmissionListItemDto {
    fn from(row: SubmissionWithContext) -> Self {
        Self {
            submission: row.submission.into(),
            campaign: SubmissionCampaignDto {
                id: row.campaign_id,
                title: row.campaign_title,
            },
            creator: SubmissionCreatorDto {
                id: row.creator_id,
                name: row.creator_name,
            },
        }
    }
}

/// Query for requesting an upload URL
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
pub struct PresignQuery {
    /// Original file name, used for the stored extension
    #[validate(length(max = 255, message = "Filename must not exceed 255 characters"))]
    pub filename: Option<String>,

    /// MIME type of the upload (image/* or video/*)
    #[validate(custom(function = "validate_media_type"))]
    pub content_type: String,
}

fn validate_media_type(content_type: &str) -> Result<(), ValidationError> {
    let (kind, subtype) = content_type.split_once('/').unwrap_or((content_type, ""));
    if matches!(kind, "image" | "video") && !subtype.trim().is_empty() {
        Ok(())
    } else {
        let mut err = ValidationError::new("media_type");
        err.message = Some("Content type must be an image or video MIME type".into());
        Err(err)
    }
}
