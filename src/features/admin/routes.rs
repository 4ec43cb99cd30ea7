use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::admin::handlers;
use crate::features::admin::services::AdminService;

/// Create admin routes (all require an admin profile), nested under `/api/admin`
pub fn routes(admin_service: Arc<AdminService>) -> Router {
    Router::new()
        .route("/stats", get(handlers::get_stats))
        .route("/users", get(handlers::list_users))
        .route("/campaigns", get(handlers::list_campaigns))
        .with_state(admin_service)
}
