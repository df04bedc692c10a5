use axum::{
    extract::{Query, State},
    Json,
};
use mealtrail_core::app_state::AppState;
use mealtrail_core::services::activity_log_service::ActivityLogService;
use mealtrail_primitives::error::ApiError;
use mealtrail_primitives::models::{ActivityLogQuery, LogPageResponse};
use std::sync::Arc;
use validator::Validate;

#[utoipa::path(
    get,
    path = "/api/activity/logs",
    params(ActivityLogQuery),
    responses(
        (status = 200, description = "One page of entries, most recent first", body = LogPageResponse),
        (status = 400, description = "Bad pagination parameters"),
        (status = 503, description = "Storage unavailable")
    ),
    tag = "Activity",
)]
pub async fn list_activity_logs(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ActivityLogQuery>,
) -> Result<Json<LogPageResponse>, ApiError> {
    query.validate()?;

    let filter = query.filter();
    let page = query.page_request(state.config.default_page_size);

    let response = ActivityLogService::list_entries(&state, &filter, page)?;
    Ok(Json(response))
}
