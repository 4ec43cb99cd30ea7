use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::applications::handlers;
use crate::features::applications::services::ApplicationService;

/// Application routes (all require authentication)
pub fn routes(service: Arc<ApplicationService>) -> Router {
    Router::new()
        .route("/api/campaigns/{id}/apply", post(handlers::apply_to_campaign))
        .route(
            "/api/campaigns/{id}/applications",
            get(handlers::list_campaign_applications),
        )
        .route("/api/applications/my", get(handlers::list_my_applications))
        .route(
            "/api/applications/{id}/accept",
            post(handlers::accept_application),
        )
        .route(
            "/api/applications/{id}/reject",
            post(handlers::reject_application),
        )
        .with_state(service)
}
