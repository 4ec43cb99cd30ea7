use crate::features::auth::handlers;
use crate::features::profiles::ProfileService;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Protected auth routes (require a verified identity)
pub fn protected_routes(service: Arc<ProfileService>) -> Router {
    Router::new()
        .route("/api/auth/me", get(handlers::get_me))
        .route("/api/auth/onboarding", post(handlers::onboarding))
        .with_state(service)
}
