use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Role bound to an identity at onboarding. Immutable afterwards.
///
/// `Admin` is never assigned by onboarding; it is provisioned out of band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Brand,
    Creator,
    Admin,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Brand => write!(f, "brand"),
            UserRole::Creator => write!(f, "creator"),
            UserRole::Admin => write!(f, "admin"),
        }
    }
}

/// Database model for the role-binding record of an identity
#[derive(Debug, Clone, FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub role: UserRole,
    pub email: String,
}
