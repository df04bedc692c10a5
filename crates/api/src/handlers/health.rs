use axum::{extract::State, http::StatusCode, Json};
use mealtrail_core::app_state::AppState;
use mealtrail_primitives::models::HealthStatus;
use std::sync::Arc;
use tracing::error;

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy and operational", body = HealthStatus),
        (status = 503, description = "Backing store unreachable", body = HealthStatus),
    ),
)]
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<HealthStatus>) {
    match state.store.ping() {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthStatus {
                status: StatusCode::OK.to_string(),
                message: "API is healthy".to_string(),
            }),
        ),
        Err(e) => {
            error!("Health check store ping failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthStatus {
                    status: StatusCode::SERVICE_UNAVAILABLE.to_string(),
                    message: "Health check store ping failed".to_string(),
                }),
            )
        }
    }
}
