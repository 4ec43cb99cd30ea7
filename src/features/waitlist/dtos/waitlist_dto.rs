use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::waitlist::models::{FormSubmission, FormType};
use crate::shared::validation::validate_not_blank;

/// Request DTO for joining the waitlist
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct JoinWaitlistDto {
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,

    #[validate(
        length(max = 128, message = "Name must not exceed 128 characters"),
        custom(function = "validate_not_blank", message = "Name is required")
    )]
    pub name: String,

    pub form_type: FormType,

    /// Any additional answers from the form, kept as-is
    #[serde(default)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}

/// Response DTO for a waitlist entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WaitlistEntryDto {
    pub id: Uuid,
    pub form_type: String,
    pub name: String,
    pub email: String,
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<FormSubmission> for WaitlistEntryDto {
    fn from(f: FormSubmission) -> Self {
        Self {
            id: f.id,
            form_type: f.form_type,
            name: f.name,
            email: f.email,
            extra: f.extra.0,
            status: f.status,
            created_at: f.created_at,
        }
    }
}
