use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::waitlist::handlers;
use crate::features::waitlist::services::WaitlistService;

/// Waitlist routes (public, no authentication)
pub fn routes(service: Arc<WaitlistService>) -> Router {
    Router::new()
        .route("/api/waitlist", post(handlers::join_waitlist))
        .with_state(service)
}
