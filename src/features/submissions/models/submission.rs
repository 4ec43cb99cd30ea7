use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::lifecycle::Lifecycle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "submission_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Submitted,
    Approved,
    Rejected,
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Submitted => write!(f, "submitted"),
            SubmissionStatus::Approved => write!(f, "approved"),
            SubmissionStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl Lifecycle for SubmissionStatus {
    const ENTITY: &'static str = "Submission";

    fn successors(self) -> &'static [Self] {
        match self {
            SubmissionStatus::Submitted => {
                &[SubmissionStatus::Approved, SubmissionStatus::Rejected]
            }
            SubmissionStatus::Approved | SubmissionStatus::Rejected => &[],
        }
    }
}

/// Database model for submission
#[derive(Debug, Clone, FromRow)]
pub struct Submission {
    pub id: Uuid,
    pub application_id: Uuid,
    pub file_url: String,
    pub description: Option<String>,
    pub status: SubmissionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Submission joined to the user id of the brand owning its campaign
#[derive(Debug, Clone, FromRow)]
pub struct ReviewableSubmission {
    #[sqlx(flatten)]
    pub submission: Submission,
    pub owner_user_id: Uuid,
}

/// Submission with its campaign and creator, for listings
#[derive(Debug, Clone, FromRow)]
pub struct SubmissionWithContext {
    #[sqlx(flatten)]
    pub submission: Submission,
    pub campaign_id: Uuid,
    pub campaign_title: String,
    pub creator_id: Uuid,
    pub creator_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::lifecycle::ensure_transition;

    #[test]
    fn test_submission_transitions() {
        use SubmissionStatus::*;

        assert!(ensure_transition(Submitted, Approved).is_ok());
        assert!(ensure_transition(Submitted, Rejected).is_ok());
        assert!(ensure_transition(Approved, Rejected).is_err());
        assert!(ensure_transition(Rejected, Approved).is_err());
        assert!(Approved.is_terminal());
        assert!(!Submitted.is_terminal());
    }
}
