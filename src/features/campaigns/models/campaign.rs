use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::core::error::Result;
use crate::shared::lifecycle::{ensure_transition, Lifecycle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "campaign_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Draft,
    Active,
    Completed,
    Cancelled,
}

impl std::fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CampaignStatus::Draft => write!(f, "draft"),
            CampaignStatus::Active => write!(f, "active"),
            CampaignStatus::Completed => write!(f, "completed"),
            CampaignStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl Lifecycle for CampaignStatus {
    const ENTITY: &'static str = "Campaign";

    fn successors(self) -> &'static [Self] {
        match self {
            CampaignStatus::Draft => &[CampaignStatus::Active, CampaignStatus::Cancelled],
            CampaignStatus::Active => &[CampaignStatus::Completed, CampaignStatus::Cancelled],
            CampaignStatus::Completed | CampaignStatus::Cancelled => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "content_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Video,
    Image,
    Both,
}

/// How brand-initiated campaign status changes are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignTransitionPolicy {
    /// Only transitions in the campaign successor table
    Strict,
    /// Any status may be overwritten with any other
    Permissive,
}

impl CampaignTransitionPolicy {
    /// Check a requested status change. Setting the current status again is a no-op.
    pub fn check(self, from: CampaignStatus, to: CampaignStatus) -> Result<()> {
        if from == to {
            return Ok(());
        }
        match self {
            CampaignTransitionPolicy::Strict => ensure_transition(from, to),
            CampaignTransitionPolicy::Permissive => Ok(()),
        }
    }
}

impl FromStr for CampaignTransitionPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "permissive" => Ok(Self::Permissive),
            other => Err(format!(
                "CAMPAIGN_STATUS_POLICY must be 'strict' or 'permissive', got '{}'",
                other
            )),
        }
    }
}

/// Database model for campaign
#[derive(Debug, Clone, FromRow)]
pub struct Campaign {
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

/// Campaign joined with its brand summary and application count
#[derive(Debug, Clone, FromRow)]
pub struct CampaignWithBrand {
    #[sqlx(flatten)]
    pub campaign: Campaign,
    pub brand_name: String,
    pub brand_logo_url: Option<String>,
    pub brand_industry: Option<String>,
    pub brand_bio: Option<String>,
    pub application_count: i64,
}

/// Campaign with the user id at the end of its ownership chain
#[derive(Debug, Clone, FromRow)]
pub struct OwnedCampaign {
    #[sqlx(flatten)]
    pub campaign: Campaign,
    pub owner_user_id: Uuid,
}

/// Campaign with its application count
#[derive(Debug, Clone, FromRow)]
pub struct CampaignWithCount {
    #[sqlx(flatten)]
    pub campaign: Campaign,
    pub application_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;

    const ALL: [CampaignStatus; 4] = [
        CampaignStatus::Draft,
        CampaignStatus::Active,
        CampaignStatus::Completed,
        CampaignStatus::Cancelled,
    ];

    #[test]
    fn test_strict_transition_table() {
        let allowed = [
            (CampaignStatus::Draft, CampaignStatus::Active),
            (CampaignStatus::Draft, CampaignStatus::Cancelled),
            (CampaignStatus::Active, CampaignStatus::Completed),
            (CampaignStatus::Active, CampaignStatus::Cancelled),
        ];

        for from in ALL {
            for to in ALL {
                let result = CampaignTransitionPolicy::Strict.check(from, to);
                if from == to || allowed.contains(&(from, to)) {
                    assert!(result.is_ok(), "{} -> {} should be allowed", from, to);
                } else {
                    assert!(
                        matches!(result, Err(AppError::InvalidState(_))),
                        "{} -> {} should be rejected",
                        from,
                        to
                    );
                }
            }
        }
    }

    #[test]
    fn test_permissive_allows_everything() {
        for from in ALL {
            for to in ALL {
                assert!(CampaignTransitionPolicy::Permissive.check(from, to).is_ok());
            }
        }
    }

    #[test]
    fn test_terminal_states() {
        assert!(CampaignStatus::Completed.is_terminal());
        assert!(CampaignStatus::Cancelled.is_terminal());
        assert!(!CampaignStatus::Draft.is_terminal());
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!(
            "strict".parse::<CampaignTransitionPolicy>().unwrap(),
            CampaignTransitionPolicy::Strict
        );
        assert_eq!(
            " Permissive ".parse::<CampaignTransitionPolicy>().unwrap(),
            CampaignTransitionPolicy::Permissive
        );
        assert!("loose".parse::<CampaignTransitionPolicy>().is_err());
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_value(CampaignStatus::Cancelled).unwrap(),
            "cancelled"
        );
        let parsed: ContentType = serde_json::from_str("\"both\"").unwrap();
        assert_eq!(parsed, ContentType::Both);
    }
}
