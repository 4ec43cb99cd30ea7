use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::profiles::models::UserRole;
use crate::shared::constants::{ADMIN_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::shared::types::PaginationQuery;

/// Pagination for admin listings (default 50 per page)
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
pub struct AdminListQuery {
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "Page must be 1 or greater"))]
    #[param(minimum = 1)]
    pub page: i64,

    #[serde(default = "default_admin_page_size")]
    #[validate(range(min = 1, max = 100, message = "Limit must be between 1 and 100"))]
    #[param(minimum = 1, maximum = 100)]
    pub limit: i64,
}

fn default_page() -> i64 {
    1
}

fn default_admin_page_size() -> i64 {
    ADMIN_PAGE_SIZE.min(MAX_PAGE_SIZE)
}

impl AdminListQuery {
    pub fn pagination(&self) -> PaginationQuery {
        PaginationQuery::new(self.page, self.limit)
    }
}

/// Platform-wide counts
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminStatsDto {
    /// Onboarded profiles
    pub users: i64,
    /// Campaigns currently active
    pub campaigns: i64,
    pub applications: i64,
}

/// Profile row for the admin user listing
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AdminUserDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub email: String,
    pub role: UserRole,
    /// Brand or creator name, absent for admins
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}
