use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppQuery};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::submissions::dtos::{
    CreateSubmissionDto, PresignQuery, SubmissionListItemDto, SubmissionResponseDto,
};
use crate::features::submissions::services::SubmissionService;
use crate::modules::storage::{MinIOClient, PresignedUpload};
use crate::shared::types::{ApiResponse, Meta};

/// Submit a deliverable for an accepted application (creators only)
#[utoipa::path(
    post,
    path = "/api/submissions",
    request_body = CreateSubmissionDto,
    responses(
        (status = 201, description = "Submission created", body = ApiResponse<SubmissionResponseDto>),
        (status = 400, description = "Validation error or application not accepted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not a creator or not the application's author"),
        (status = 404, description = "Application not found")
    ),
    tag = "submissions",
    security(("bearer_auth" = []))
)]
pub async fn create_submission(
    user: AuthenticatedUser,
    State(service): State<Arc<SubmissionService>>,
    AppJson(dto): AppJson<CreateSubmissionDto>,
) -> Result<(StatusCode, Json<ApiResponse<SubmissionResponseDto>>)> {
    dto.validate()?;

    let submission = service.create(&user, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(submission),
            Some("Submission created".to_string()),
            None,
        )),
    ))
}

/// List submissions visible to the caller
#[utoipa::path(
    get,
    path = "/api/submissions",
    responses(
        (status = 200, description = "Brand: submissions to own campaigns. Creator: own submissions.", body = ApiResponse<Vec<SubmissionListItemDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "submissions",
    security(("bearer_auth" = []))
)]
pub async fn list_submissions(
    user: AuthenticatedUser,
    State(service): State<Arc<SubmissionService>>,
) -> Result<Json<ApiResponse<Vec<SubmissionListItemDto>>>> {
    let submissions = service.list(&user).await?;
    let total = submissions.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(submissions),
        None,
        Some(Meta::total(total)),
    )))
}

/// Approve a submission
#[utoipa::path(
    post,
    path = "/api/submissions/{id}/approve",
    params(
        ("id" = Uuid, Path, description = "Submission ID")
    ),
    responses(
        (status = 200, description = "Submission approved", body = ApiResponse<SubmissionResponseDto>),
        (status = 400, description = "Submission already reviewed"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the owning brand"),
        (status = 404, description = "Submission not found")
    ),
    tag = "submissions",
    security(("bearer_auth" = []))
)]
pub async fn approve_submission(
    user: AuthenticatedUser,
    State(service): State<Arc<SubmissionService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SubmissionResponseDto>>> {
    let submission = service.approve(&user, id).await?;
    Ok(Json(ApiResponse::success(
        Some(submission),
        Some("Submission approved".to_string()),
        None,
    )))
}

/// Reject a submission
#[utoipa::path(
    post,
    path = "/api/submissions/{id}/reject",
    params(
        ("id" = Uuid, Path, description = "Submission ID")
    ),
    responses(
        (status = 200, description = "Submission rejected", body = ApiResponse<SubmissionResponseDto>),
        (status = 400, description = "Submission already reviewed"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the owning brand"),
        (status = 404, description = "Submission not found")
    ),
    tag = "submissions",
    security(("bearer_auth" = []))
)]
pub async fn reject_submission(
    user: AuthenticatedUser,
    State(service): State<Arc<SubmissionService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SubmissionResponseDto>>> {
    let submission = service.reject(&user, id).await?;
    Ok(Json(ApiResponse::success(
        Some(submission),
        Some("Submission rejected".to_string()),
        None,
    )))
}

/// Get a presigned upload URL for submission media
#[utoipa::path(
    get,
    path = "/api/submissions/presign",
    params(PresignQuery),
    responses(
        (status = 200, description = "Presigned PUT URL and resulting file URL", body = ApiResponse<PresignedUpload>),
        (status = 400, description = "Unsupported content type"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "submissions",
    security(("bearer_auth" = []))
)]
pub async fn presign_upload(
    user: AuthenticatedUser,
    State(storage): State<Arc<MinIOClient>>,
    AppQuery(query): AppQuery<PresignQuery>,
) -> Result<Json<ApiResponse<PresignedUpload>>> {
    query.validate()?;

    let upload = storage
        .presign_upload(user.id, query.filename.as_deref(), &query.content_type)
        .await?;
    Ok(Json(ApiResponse::success(Some(upload), None, None)))
}
