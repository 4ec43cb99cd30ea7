use serde_json::{Map, Value};
use sqlx::types::Json;
use sqlx::PgPool;

use crate::core::error::Result;
use crate::features::waitlist::dtos::{JoinWaitlistDto, WaitlistEntryDto};
use crate::features::waitlist::models::FormSubmission;

/// Stores waitlist intake forms
pub struct WaitlistService {
    pool: PgPool,
}

impl WaitlistService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn join(&self, dto: JoinWaitlistDto) -> Result<WaitlistEntryDto> {
        let entry = sqlx::query_as::<_, FormSubmission>(
            r#"
            INSERT INTO form_submissions (form_type, name, email, extra)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(dto.form_type.as_str())
        .bind(dto.name.trim())
        .bind(dto.email.trim())
        .bind(Json::<Map<String, Value>>(dto.extra))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert waitlist entry: {:?}", e);
            e
        })?;

        tracing::info!(
            "Waitlist entry created: id={}, form_type={}",
            entry.id,
            entry.form_type
        );

        Ok(entry.into())
    }
}
