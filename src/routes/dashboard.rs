use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
    Extension,
};
use serde_json::json;
use uuid::Uuid;

use crate::{
    error::{Error, Result},
    middleware::auth::AuthenticatedUser,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/dashboard",
    responses(
        (status = 200, description = "Alerts, quick stats and recent activity for the caller"),
        (status = 401, description = "Missing or invalid bearer token")
    )
)]
#[axum::debug_handler]
pub async fn get_dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> impl IntoResponse {
    Json(state.dashboard_service.get_dashboard_summary(user.id).await)
}

#[utoipa::path(
    get,
    path = "/api/dashboard/alerts",
    responses(
        (status = 200, description = "Dashboard alerts, most urgent first"),
        (status = 401, description = "Missing or invalid bearer token")
    )
)]
#[axum::debug_handler]
pub async fn get_alerts(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<impl IntoResponse> {
    let items = state.dashboard_service.alerts(user.id).await?;
    Ok(Json(json!({ "items": items })))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    responses(
        (status = 200, description = "Quick stats tiles"),
        (status = 401, description = "Missing or invalid bearer token")
    )
)]
#[axum::debug_handler]
pub async fn get_quick_stats(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<impl IntoResponse> {
    let stats = state.dashboard_service.quick_stats(user.id).await?;
    Ok(Json(stats))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/activity",
    responses(
        (status = 200, description = "Up to 10 recent document, interview and application events"),
        (status = 401, description = "Missing or invalid bearer token")
    )
)]
#[axum::debug_handler]
pub async fn get_recent_activity(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<impl IntoResponse> {
    let items = state.dashboard_service.recent_activity(user.id).await?;
    Ok(Json(json!({ "items": items })))
}

#[utoipa::path(
    get,
    path = "/api/admin/candidates/{id}/dashboard",
    params(
        ("id" = Uuid, Path, description = "Candidate ID")
    ),
    responses(
        (status = 200, description = "Dashboard summary of the given candidate"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Caller is not an admin")
    )
)]
#[axum::debug_handler]
pub async fn get_candidate_dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(candidate_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    if !user.has_role("admin") {
        return Err(Error::Forbidden("Admin role required".into()));
    }
    tracing::info!(admin_id = %user.id, candidate_id = %candidate_id, "Admin viewing candidate dashboard");
    let summary = state
        .dashboard_service
        .get_dashboard_summary(candidate_id)
        .await;
    Ok(Json(summary))
}
