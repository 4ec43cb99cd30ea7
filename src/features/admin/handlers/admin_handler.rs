use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::AppQuery;
use crate::features::admin::dtos::{AdminListQuery, AdminStatsDto, AdminUserDto};
use crate::features::admin::services::AdminService;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::campaigns::dtos::CampaignDetailDto;
use crate::shared::types::ApiResponse;

/// Platform statistics
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    responses(
        (status = 200, description = "Profile, active campaign and application counts", body = ApiResponse<AdminStatsDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_stats(
    user: AuthenticatedUser,
    State(service): State<Arc<AdminService>>,
) -> Result<Json<ApiResponse<AdminStatsDto>>> {
    let stats = service.stats(&user).await?;
    Ok(Json(ApiResponse::success(Some(stats), None, None)))
}

/// List all users (paginated)
#[utoipa::path(
    get,
    path = "/api/admin/users",
    params(AdminListQuery),
    responses(
        (status = 200, description = "List of profiles", body = ApiResponse<Vec<AdminUserDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_users(
    user: AuthenticatedUser,
    State(service): State<Arc<AdminService>>,
    AppQuery(params): AppQuery<AdminListQuery>,
) -> Result<Json<ApiResponse<Vec<AdminUserDto>>>> {
    params.validate()?;

    let pagination = params.pagination();
    let (items, total) = service.list_users(&user, &pagination).await?;

    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(pagination.meta(total)),
    )))
}

/// List all campaigns (paginated)
#[utoipa::path(
    get,
    path = "/api/admin/campaigns",
    params(AdminListQuery),
    responses(
        (status = 200, description = "List of campaigns with brand", body = ApiResponse<Vec<CampaignDetailDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_campaigns(
    user: AuthenticatedUser,
    State(service): State<Arc<AdminService>>,
    AppQuery(params): AppQuery<AdminListQuery>,
) -> Result<Json<ApiResponse<Vec<CampaignDetailDto>>>> {
    params.validate()?;

    let pagination = params.pagination();
    let (items, total) = service.list_campaigns(&user, &pagination).await?;

    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(pagination.meta(total)),
    )))
}

#[cfg(test)]
mod tests {
    use crate::shared::test_helpers::{mint_token, test_server};
    use axum::http::StatusCode;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_admin_routes_require_authentication() {
        let server = test_server();
        for path in ["/api/admin/stats", "/api/admin/users", "/api/admin/campaigns"] {
            server.get(path).await.assert_status(StatusCode::UNAUTHORIZED);
        }
    }

    #[tokio::test]
    async fn test_admin_listing_rejects_bad_limit() {
        let server = test_server();
        let token = mint_token(Uuid::new_v4(), "admin@example.com");

        server
            .get("/api/admin/users")
            .authorization_bearer(token)
            .add_query_param("limit", 0)
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}
