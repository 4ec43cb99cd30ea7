use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::waitlist::dtos::{JoinWaitlistDto, WaitlistEntryDto};
use crate::features::waitlist::services::WaitlistService;
use crate::shared::types::ApiResponse;

/// Join the waitlist
///
/// Public intake form for prospective brands and creators.
#[utoipa::path(
    post,
    path = "/api/waitlist",
    request_body = JoinWaitlistDto,
    responses(
        (status = 201, description = "Added to the waitlist", body = ApiResponse<WaitlistEntryDto>),
        (status = 400, description = "Invalid request")
    ),
    tag = "waitlist"
)]
pub async fn join_waitlist(
    State(service): State<Arc<WaitlistService>>,
    AppJson(dto): AppJson<JoinWaitlistDto>,
) -> Result<(StatusCode, Json<ApiResponse<WaitlistEntryDto>>)> {
    dto.validate()?;

    let entry = service.join(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(entry),
            Some("Added to the waitlist".to_string()),
            None,
        )),
    ))
}

#[cfg(test)]
mod tests {
    use crate::shared::test_helpers::test_server;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_waitlist_is_public_and_validated() {
        let server = test_server();

        let response = server
            .post("/api/waitlist")
            .json(&serde_json::json!({
                "email": "not-an-email",
                "name": "Dana",
                "form_type": "creator"
            }))
            .await;

        // 400 rather than 401: no credential is needed
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["errors"][0], "email: Email must be a valid email address");
    }

    #[tokio::test]
    async fn test_waitlist_rejects_unknown_form_type() {
        let server = test_server();

        let response = server
            .post("/api/waitlist")
            .json(&serde_json::json!({
                "email": "dana@example.com",
                "name": "Dana",
                "form_type": "agency"
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
