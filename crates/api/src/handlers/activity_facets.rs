use axum::{extract::State, Json};
use mealtrail_core::app_state::AppState;
use mealtrail_core::services::activity_log_service::ActivityLogService;
use mealtrail_primitives::error::ApiError;
use mealtrail_primitives::models::FacetsResponse;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/activity/facets",
    responses(
        (status = 200, description = "Distinct modules and sub-modules, sorted", body = FacetsResponse),
        (status = 503, description = "Storage unavailable")
    ),
    tag = "Activity",
)]
pub async fn list_activity_facets(
    State(state): State<Arc<AppState>>,
) -> Result<Json<FacetsResponse>, ApiError> {
    let facets = ActivityLogService::list_facets(&state)?;
    Ok(Json(facets))
}
