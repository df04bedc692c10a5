mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use common::fixtures::{base_time, marketplace_rows, row};
use common::{create_test_app, create_test_app_state, create_test_app_state_with};
use mealtrail_core::store::MemoryActivityLogStore;
use mealtrail_primitives::models::{ActionKind, FacetsResponse, LogPageResponse};
use serial_test::serial;

#[tokio::test]
#[serial]
async fn list_returns_most_recent_first() {
    let store = MemoryActivityLogStore::with_entries(marketplace_rows());
    let state = create_test_app_state_with(store);
    let server = TestServer::new(create_test_app(state)).unwrap();

    let response = server.get("/api/activity/logs").await;
    response.assert_status_ok();

    let body: LogPageResponse = response.json();
    assert_eq!(body.total_count, 6);
    assert_eq!(body.entries.len(), 6);
    assert_eq!(body.entries[0].sub_module, "Refunds");
    for pair in body.entries.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
}

#[tokio::test]
#[serial]
async fn module_filter_returns_only_matching_entries() {
    let t = base_time();
    let store = MemoryActivityLogStore::with_entries(vec![
        row("a", None, "Orders", "Order Management", ActionKind::Create, t),
        row("b", None, "Orders", "Refunds", ActionKind::Update, t),
        row("c", None, "Payments", "Withdrawals", ActionKind::Create, t),
    ]);
    let state = create_test_app_state_with(store);
    let server = TestServer::new(create_test_app(state)).unwrap();

    let response = server
        .get("/api/activity/logs")
        .add_query_param("module", "Orders")
        .add_query_param("limit", "10")
        .await;
    response.assert_status_ok();

    let body: LogPageResponse = response.json();
    assert_eq!(body.total_count, 2);
    assert_eq!(body.entries.len(), 2);
    assert!(body.entries.iter().all(|e| e.module == "Orders"));
}

#[tokio::test]
#[serial]
async fn sub_module_filter_applies_without_module() {
    let state = create_test_app_state_with(MemoryActivityLogStore::with_entries(
        marketplace_rows(),
    ));
    let server = TestServer::new(create_test_app(state)).unwrap();

    let response = server
        .get("/api/activity/logs")
        .add_query_param("sub_module", "Withdrawals")
        .await;
    response.assert_status_ok();

    let body: LogPageResponse = response.json();
    assert_eq!(body.total_count, 2);
    assert!(body.entries.iter().all(|e| e.sub_module == "Withdrawals"));
}

#[tokio::test]
#[serial]
async fn combined_filters_intersect() {
    let state = create_test_app_state_with(MemoryActivityLogStore::with_entries(
        marketplace_rows(),
    ));
    let server = TestServer::new(create_test_app(state)).unwrap();

    let response = server
        .get("/api/activity/logs")
        .add_query_param("module", "Payments")
        .add_query_param("sub_module", "Withdrawals")
        .await;
    let body: LogPageResponse = response.json();
    assert_eq!(body.total_count, 2);

    // sub-module that exists, but not under this module
    let response = server
        .get("/api/activity/logs")
        .add_query_param("module", "Orders")
        .add_query_param("sub_module", "Withdrawals")
        .await;
    let body: LogPageResponse = response.json();
    assert_eq!(body.total_count, 0);
    assert!(body.entries.is_empty());
}

#[tokio::test]
#[serial]
async fn page_past_the_end_is_empty_with_total_intact() {
    let state = create_test_app_state_with(MemoryActivityLogStore::with_entries(
        marketplace_rows(),
    ));
    let server = TestServer::new(create_test_app(state)).unwrap();

    let response = server
        .get("/api/activity/logs")
        .add_query_param("page", "5")
        .add_query_param("limit", "10")
        .await;
    response.assert_status_ok();

    let body: LogPageResponse = response.json();
    assert!(body.entries.is_empty());
    assert_eq!(body.total_count, 6);
}

#[tokio::test]
#[serial]
async fn bad_pagination_parameters_are_rejected() {
    let state = create_test_app_state();
    let server = TestServer::new(create_test_app(state)).unwrap();

    let response = server
        .get("/api/activity/logs")
        .add_query_param("limit", "0")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .get("/api/activity/logs")
        .add_query_param("page", "-1")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .get("/api/activity/logs")
        .add_query_param("limit", "101")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[serial]
async fn empty_collection_lists_cleanly() {
    let state = create_test_app_state();
    let server = TestServer::new(create_test_app(state)).unwrap();

    let response = server.get("/api/activity/logs").await;
    response.assert_status_ok();
    let body: LogPageResponse = response.json();
    assert!(body.entries.is_empty());
    assert_eq!(body.total_count, 0);

    let response = server.get("/api/activity/facets").await;
    response.assert_status_ok();
    let facets: FacetsResponse = response.json();
    assert!(facets.modules.is_empty());
    assert!(facets.sub_modules.is_empty());
}

#[tokio::test]
#[serial]
async fn facets_are_distinct_and_sorted() {
    let state = create_test_app_state_with(MemoryActivityLogStore::with_entries(
        marketplace_rows(),
    ));
    let server = TestServer::new(create_test_app(state)).unwrap();

    let response = server.get("/api/activity/facets").await;
    response.assert_status_ok();

    let facets: FacetsResponse = response.json();
    assert_eq!(facets.modules, vec!["Customers", "Orders", "Payments"]);
    assert_eq!(
        facets.sub_modules,
        vec![
            "Disputes",
            "Order Management",
            "Profiles",
            "Refunds",
            "Withdrawals"
        ]
    );
}

#[tokio::test]
#[serial]
async fn health_reports_ok_over_memory_store() {
    let state = create_test_app_state();
    let server = TestServer::new(create_test_app(state)).unwrap();

    let response = server.get("/api/health").await;
    response.assert_status_ok();
}
