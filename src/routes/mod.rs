pub mod dashboard;
pub mod health;

use axum::{routing::get, Router};

use crate::{middleware::auth::require_bearer_auth, AppState};

pub fn build_router(state: AppState) -> Router {
    let dashboard_api = Router::new()
        .route("/api/dashboard", get(dashboard::get_dashboard))
        .route("/api/dashboard/alerts", get(dashboard::get_alerts))
        .route("/api/dashboard/stats", get(dashboard::get_quick_stats))
        .route("/api/dashboard/activity", get(dashboard::get_recent_activity))
        .route(
            "/api/admin/candidates/:id/dashboard",
            get(dashboard::get_candidate_dashboard),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            require_bearer_auth,
        ));

    Router::new()
        .route("/health", get(health::health))
        .merge(dashboard_api)
        .with_state(state)
}
