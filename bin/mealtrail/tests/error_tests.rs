mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use common::{create_test_app, create_test_app_state_with, FailingStore};
use mealtrail_core::services::activity_log_service::ActivityLogService;
use mealtrail_primitives::error::ApiError;
use mealtrail_primitives::models::{LogFilter, PageRequest};
use serial_test::serial;

#[tokio::test]
#[serial]
async fn unreachable_storage_maps_to_service_unavailable() {
    let state = create_test_app_state_with(FailingStore);
    let server = TestServer::new(create_test_app(state)).unwrap();

    let response = server.get("/api/activity/logs").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let response = server.get("/api/activity/facets").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let response = server.get("/api/health").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
#[serial]
async fn invalid_arguments_win_over_storage_failures() {
    // validation runs before the store is touched
    let state = create_test_app_state_with(FailingStore);
    let server = TestServer::new(create_test_app(state)).unwrap();

    let response = server
        .get("/api/activity/logs")
        .add_query_param("limit", "0")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[test]
fn service_classifies_storage_failures() {
    let state = create_test_app_state_with(FailingStore);

    let result =
        ActivityLogService::list_entries(&state, &LogFilter::default(), PageRequest::new(0, 10));
    match result {
        Err(e) => assert!(e.is_storage_unavailable()),
        Ok(_) => panic!("expected a storage error"),
    }

    let result = ActivityLogService::list_facets(&state);
    match result {
        Err(e) => assert!(e.is_storage_unavailable()),
        Ok(_) => panic!("expected a storage error"),
    }
}

#[test]
fn error_classification_is_narrow() {
    assert!(ApiError::DatabaseConnection("down".into()).is_storage_unavailable());
    assert!(ApiError::Upstream("timeout".into()).is_storage_unavailable());
    assert!(!ApiError::InvalidArgument("bad page".into()).is_storage_unavailable());
    assert!(!ApiError::Internal("bug".into()).is_storage_unavailable());
}
