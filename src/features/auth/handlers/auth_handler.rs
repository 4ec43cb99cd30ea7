use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::auth::dto::{MeResponseDto, OnboardingRequestDto};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::profiles::dtos::ProfileResponseDto;
use crate::features::profiles::ProfileService;
use crate::shared::types::ApiResponse;
use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use validator::Validate;

/// Get current user's onboarding state
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current user info", body = ApiResponse<MeResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Server auth not configured")
    ),
    tag = "auth",
    security(("bearer_auth" = []))
)]
pub async fn get_me(
    user: AuthenticatedUser,
    State(service): State<Arc<ProfileService>>,
) -> Result<Json<ApiResponse<MeResponseDto>>> {
    let profile = service.find_profile(user.id).await?;
    let me = MeResponseDto::new(profile.map(|p| p.role));
    Ok(Json(ApiResponse::success(Some(me), None, None)))
}

/// Create the caller's profile and brand/creator record (first time only)
#[utoipa::path(
    post,
    path = "/api/auth/onboarding",
    request_body = OnboardingRequestDto,
    responses(
        (status = 201, description = "Onboarding completed", body = ApiResponse<ProfileResponseDto>),
        (status = 400, description = "Validation error or already onboarded"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "auth",
    security(("bearer_auth" = []))
)]
pub async fn onboarding(
    user: AuthenticatedUser,
    State(service): State<Arc<ProfileService>>,
    AppJson(dto): AppJson<OnboardingRequestDto>,
) -> Result<(StatusCode, Json<ApiResponse<ProfileResponseDto>>)> {
    dto.validate()?;

    let profile = service.onboard(&user, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(profile),
            Some("Onboarding completed".to_string()),
            None,
        )),
    ))
}

#[cfg(test)]
mod tests {
    use crate::shared::test_helpers::{
        mint_token, mint_token_with, test_server, unconfigured_test_server, TEST_AUDIENCE,
    };
    use axum::http::StatusCode;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_me_without_token_is_unauthorized() {
        let server = test_server();
        let response = server.get("/api/auth/me").await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "No token");
    }

    #[tokio::test]
    async fn test_me_with_forged_token_is_unauthorized() {
        let server = test_server();
        let forged = mint_token_with(
            &Uuid::new_v4().to_string(),
            TEST_AUDIENCE,
            chrono::Utc::now().timestamp() + 600,
            "some-other-secret",
        );

        let response = server.get("/api/auth/me").authorization_bearer(forged).await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "Invalid token");
    }

    #[tokio::test]
    async fn test_unconfigured_identity_is_server_error() {
        let server = unconfigured_test_server();

        let response = server.get("/api/auth/me").await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "Server auth not configured");

        let token = mint_token(Uuid::new_v4(), "brand@example.com");
        let response = server.get("/api/auth/me").authorization_bearer(token).await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_onboarding_rejects_invalid_body_before_data_access() {
        let server = test_server();
        let token = mint_token(Uuid::new_v4(), "brand@example.com");

        let response = server
            .post("/api/auth/onboarding")
            .authorization_bearer(&token)
            .json(&serde_json::json!({ "role": "brand", "name": "  " }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["errors"][0], "name: Name is required");

        // Unknown role never reaches validation
        let response = server
            .post("/api/auth/onboarding")
            .authorization_bearer(&token)
            .json(&serde_json::json!({ "role": "admin", "name": "Root" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
