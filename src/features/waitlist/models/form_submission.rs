use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::types::Json;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Which waitlist form was filled in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FormType {
    Creator,
    Brand,
}

impl FormType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormType::Creator => "creator",
            FormType::Brand => "brand",
        }
    }
}

/// Database model for a waitlist form submission
#[derive(Debug, Clone, FromRow)]
pub struct FormSubmission {
    pub id: Uuid,
    pub form_type: String,
    pub name: String,
    pub email: String,
    /// Free-form answers, stored verbatim
    pub extra: Json<Map<String, Value>>,
    pub status: String,
    #[allow(dead_code)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    #[allow(dead_code)]
    pub updated_at: DateTime<Utc>,
}
