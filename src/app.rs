use std::sync::Arc;

use axum::{http::StatusCode, routing::get, Router};
use sqlx::PgPool;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::core::config::AppConfig;
use crate::core::middleware;
use crate::features::admin::{routes as admin_routes, AdminService};
use crate::features::applications::{routes as applications_routes, ApplicationService};
use crate::features::auth::{routes as auth_routes, IdentityResolver};
use crate::features::campaigns::models::CampaignTransitionPolicy;
use crate::features::campaigns::{routes as campaigns_routes, CampaignService};
use crate::features::profiles::{routes as profiles_routes, ProfileService};
use crate::features::submissions::{routes as submissions_routes, SubmissionService};
use crate::features::waitlist::{routes as waitlist_routes, WaitlistService};
use crate::modules::storage::MinIOClient;

/// Process-wide services, created once and shared by every request
#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<IdentityResolver>,
    pub storage: Arc<MinIOClient>,
    pub profiles: Arc<ProfileService>,
    pub campaigns: Arc<CampaignService>,
    pub applications: Arc<ApplicationService>,
    pub submissions: Arc<SubmissionService>,
    pub waitlist: Arc<WaitlistService>,
    pub admin: Arc<AdminService>,
}

impl AppState {
    pub fn new(
        pool: PgPool,
        identity: Arc<IdentityResolver>,
        storage: Arc<MinIOClient>,
        campaign_policy: CampaignTransitionPolicy,
    ) -> Self {
        let profiles = Arc::new(ProfileService::new(pool.clone()));
        let campaigns = Arc::new(CampaignService::new(
            pool.clone(),
            Arc::clone(&profiles),
            campaign_policy,
        ));
        let applications = Arc::new(ApplicationService::new(
            pool.clone(),
            Arc::clone(&profiles),
            Arc::clone(&campaigns),
        ));
        let submissions = Arc::new(SubmissionService::new(pool.clone(), Arc::clone(&profiles)));
        let waitlist = Arc::new(WaitlistService::new(pool.clone()));
        let admin = Arc::new(AdminService::new(pool, Arc::clone(&profiles)));

        Self {
            identity,
            storage,
            profiles,
            campaigns,
            applications,
            submissions,
            waitlist,
            admin,
        }
    }
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Build the API router: public and authenticated routes plus the shared
/// HTTP layers (CORS, body limit, request id, tracing).
pub fn build_router(state: AppState, config: &AppConfig) -> Router {
    // Protected routes (require a verified bearer credential)
    let protected_routes = Router::new()
        .merge(auth_routes::protected_routes(Arc::clone(&state.profiles)))
        .merge(profiles_routes::routes(Arc::clone(&state.profiles)))
        .merge(campaigns_routes::protected_routes(Arc::clone(
            &state.campaigns,
        )))
        .merge(applications_routes::routes(Arc::clone(&state.applications)))
        .merge(submissions_routes::routes(
            Arc::clone(&state.submissions),
            Arc::clone(&state.storage),
        ))
        .nest("/api/admin", admin_routes::routes(Arc::clone(&state.admin)))
        .route_layer(axum::middleware::from_fn_with_state(
            Arc::clone(&state.identity),
            middleware::auth_middleware,
        ));

    // Public routes (no auth required)
    let public_routes = Router::new()
        .merge(campaigns_routes::public_routes(Arc::clone(&state.campaigns)))
        .merge(waitlist_routes::routes(Arc::clone(&state.waitlist)))
        .route("/health", get(health_check));

    Router::new()
        .merge(protected_routes)
        .merge(public_routes)
        .layer(RequestBodyLimitLayer::new(config.max_request_body_size))
        .layer(middleware::cors_layer(config.cors_allowed_origins.clone()))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}
