use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::applications::dtos::{
    ApplicationResponseDto, ApplyDto, CampaignApplicationDto, MyApplicationDto,
};
use crate::features::applications::services::ApplicationService;
use crate::features::auth::model::AuthenticatedUser;
use crate::shared::types::{ApiResponse, Meta};

/// Apply to a campaign (creators only)
#[utoipa::path(
    post,
    path = "/api/campaigns/{id}/apply",
    params(
        ("id" = Uuid, Path, description = "Campaign ID")
    ),
    request_body = ApplyDto,
    responses(
        (status = 201, description = "Application submitted", body = ApiResponse<ApplicationResponseDto>),
        (status = 400, description = "Campaign not active or already applied"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller has no creator profile"),
        (status = 404, description = "Campaign not found")
    ),
    tag = "applications",
    security(("bearer_auth" = []))
)]
pub async fn apply_to_campaign(
    user: AuthenticatedUser,
    State(service): State<Arc<ApplicationService>>,
    Path(campaign_id): Path<Uuid>,
    AppJson(dto): AppJson<ApplyDto>,
) -> Result<(StatusCode, Json<ApiResponse<ApplicationResponseDto>>)> {
    dto.validate()?;

    let application = service.apply(&user, campaign_id, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(application),
            Some("Application submitted".to_string()),
            None,
        )),
    ))
}

/// List applications to a campaign (owning brand only)
#[utoipa::path(
    get,
    path = "/api/campaigns/{id}/applications",
    params(
        ("id" = Uuid, Path, description = "Campaign ID")
    ),
    responses(
        (status = 200, description = "Applications with creator summary", body = ApiResponse<Vec<CampaignApplicationDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the owning brand"),
        (status = 404, description = "Campaign not found")
    ),
    tag = "applications",
    security(("bearer_auth" = []))
)]
pub async fn list_campaign_applications(
    user: AuthenticatedUser,
    State(service): State<Arc<ApplicationService>>,
    Path(campaign_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<CampaignApplicationDto>>>> {
    let applications = service.list_for_campaign(&user, campaign_id).await?;
    let total = applications.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(applications),
        None,
        Some(Meta::total(total)),
    )))
}

/// Accept an application
#[utoipa::path(
    post,
    path = "/api/applications/{id}/accept",
    params(
        ("id" = Uuid, Path, description = "Application ID")
    ),
    responses(
        (status = 200, description = "Application accepted", body = ApiResponse<ApplicationResponseDto>),
        (status = 400, description = "Application not pending or campaign not active"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the owning brand"),
        (status = 404, description = "Application not found")
    ),
    tag = "applications",
    security(("bearer_auth" = []))
)]
pub async fn accept_application(
    user: AuthenticatedUser,
    State(service): State<Arc<ApplicationService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ApplicationResponseDto>>> {
    let application = service.accept(&user, id).await?;
    Ok(Json(ApiResponse::success(
        Some(application),
        Some("Application accepted".to_string()),
        None,
    )))
}

/// Reject an application
#[utoipa::path(
    post,
    path = "/api/applications/{id}/reject",
    params(
        ("id" = Uuid, Path, description = "Application ID")
    ),
    responses(
        (status = 200, description = "Application rejected", body = ApiResponse<ApplicationResponseDto>),
        (status = 400, description = "Application not pending"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the owning brand"),
        (status = 404, description = "Application not found")
    ),
    tag = "applications",
    security(("bearer_auth" = []))
)]
pub async fn reject_application(
    user: AuthenticatedUser,
    State(service): State<Arc<ApplicationService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ApplicationResponseDto>>> {
    let application = service.reject(&user, id).await?;
    Ok(Json(ApiResponse::success(
        Some(application),
        Some("Application rejected".to_string()),
        None,
    )))
}

/// List the calling creator's applications
#[utoipa::path(
    get,
    path = "/api/applications/my",
    responses(
        (status = 200, description = "Own applications with campaign summary", body = ApiResponse<Vec<MyApplicationDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller has no creator profile")
    ),
    tag = "applications",
    security(("bearer_auth" = []))
)]
pub async fn list_my_applications(
    user: AuthenticatedUser,
    State(service): State<Arc<ApplicationService>>,
) -> Result<Json<ApiResponse<Vec<MyApplicationDto>>>> {
    let applications = service.list_mine(&user).await?;
    let total = applications.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(applications),
        None,
        Some(Meta::total(total)),
    )))
}
