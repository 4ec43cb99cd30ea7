use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::features::campaigns::handlers;
use crate::features::campaigns::services::CampaignService;

/// Public campaign routes (browsing needs no authentication)
pub fn public_routes(service: Arc<CampaignService>) -> Router {
    Router::new()
        .route("/api/campaigns", get(handlers::list_campaigns))
        .route("/api/campaigns/{id}", get(handlers::get_campaign))
        .with_state(service)
}

/// Protected campaign routes (require authentication)
pub fn protected_routes(service: Arc<CampaignService>) -> Router {
    Router::new()
        .route("/api/campaigns", post(handlers::create_campaign))
        .route("/api/campaigns/my", get(handlers::list_my_campaigns))
        .route("/api/campaigns/{id}", patch(handlers::update_campaign))
        .with_state(service)
}
