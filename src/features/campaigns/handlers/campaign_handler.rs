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
use crate::features::campaigns::dtos::{
    CampaignDetailDto, CampaignQuery, CampaignResponseDto, CreateCampaignDto, MyCampaignDto,
    UpdateCampaignDto,
};
use crate::features::campaigns::services::CampaignService;
use crate::shared::types::{ApiResponse, Meta};

/// List campaigns
#[utoipa::path(
    get,
    path = "/api/campaigns",
    params(CampaignQuery),
    responses(
        (status = 200, description = "Paginated campaigns with brand summary", body = ApiResponse<Vec<CampaignDetailDto>>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "campaigns"
)]
pub async fn list_campaigns(
    State(service): State<Arc<CampaignService>>,
    AppQuery(query): AppQuery<CampaignQuery>,
) -> Result<Json<ApiResponse<Vec<CampaignDetailDto>>>> {
    query.validate()?;

    let (campaigns, meta) = service.list(&query).await?;
    Ok(Json(ApiResponse::success(Some(campaigns), None, Some(meta))))
}

/// Get a campaign by ID
#[utoipa::path(
    get,
    path = "/api/campaigns/{id}",
    params(
        ("id" = Uuid, Path, description = "Campaign ID")
    ),
    responses(
        (status = 200, description = "Campaign details", body = ApiResponse<CampaignDetailDto>),
        (status = 404, description = "Campaign not found")
    ),
    tag = "campaigns"
)]
pub async fn get_campaign(
    State(service): State<Arc<CampaignService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<CampaignDetailDto>>> {
    let campaign = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(campaign), None, None)))
}

/// Create a campaign (brands only)
#[utoipa::path(
    post,
    path = "/api/campaigns",
    request_body = CreateCampaignDto,
    responses(
        (status = 201, description = "Campaign created", body = ApiResponse<CampaignResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller has no brand profile")
    ),
    tag = "campaigns",
    security(("bearer_auth" = []))
)]
pub async fn create_campaign(
    user: AuthenticatedUser,
    State(service): State<Arc<CampaignService>>,
    AppJson(dto): AppJson<CreateCampaignDto>,
) -> Result<(StatusCode, Json<ApiResponse<CampaignResponseDto>>)> {
    dto.validate()?;

    let campaign = service.create(&user, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(campaign),
            Some("Campaign created".to_string()),
            None,
        )),
    ))
}

/// Update a campaign (owning brand only)
#[utoipa::path(
    patch,
    path = "/api/campaigns/{id}",
    params(
        ("id" = Uuid, Path, description = "Campaign ID")
    ),
    request_body = UpdateCampaignDto,
    responses(
        (status = 200, description = "Campaign updated", body = ApiResponse<CampaignResponseDto>),
        (status = 400, description = "Validation error or illegal status change"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the owning brand"),
        (status = 404, description = "Campaign not found")
    ),
    tag = "campaigns",
    security(("bearer_auth" = []))
)]
pub async fn update_campaign(
    user: AuthenticatedUser,
    State(service): State<Arc<CampaignService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateCampaignDto>,
) -> Result<Json<ApiResponse<CampaignResponseDto>>> {
    dto.validate()?;

    let campaign = service.update(&user, id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(campaign),
        Some("Campaign updated".to_string()),
        None,
    )))
}

/// List the calling brand's own campaigns
#[utoipa::path(
    get,
    path = "/api/campaigns/my",
    responses(
        (status = 200, description = "Own campaigns with application counts", body = ApiResponse<Vec<MyCampaignDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller has no brand profile")
    ),
    tag = "campaigns",
    security(("bearer_auth" = []))
)]
pub async fn list_my_campaigns(
    user: AuthenticatedUser,
    State(service): State<Arc<CampaignService>>,
) -> Result<Json<ApiResponse<Vec<MyCampaignDto>>>> {
    let campaigns = service.list_mine(&user).await?;
    let total = campaigns.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(campaigns),
        None,
        Some(Meta::total(total)),
    )))
}
