use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::submissions::handlers;
use crate::features::submissions::services::SubmissionService;
use crate::modules::storage::MinIOClient;

/// Submission routes (all require authentication)
pub fn routes(service: Arc<SubmissionService>, storage: Arc<MinIOClient>) -> Router {
    let uploads = Router::new()
        .route("/api/submissions/presign", get(handlers::presign_upload))
        .with_state(storage);

    Router::new()
        .route(
            "/api/submissions",
            get(handlers::list_submissions).post(handlers::create_submission),
        )
        .route(
            "/api/submissions/{id}/approve",
            post(handlers::approve_submission),
        )
        .route(
            "/api/submissions/{id}/reject",
            post(handlers::reject_submission),
        )
        .with_state(service)
        .merge(uploads)
}
