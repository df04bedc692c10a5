use axum::Router;
use mealtrail_core::app_state::AppState;
use mealtrail_core::store::{ActivityLogStore, MemoryActivityLogStore};
use mealtrail_primitives::error::ApiError;
use mealtrail_primitives::models::app_config::AppConfig;
use mealtrail_primitives::models::{ActivityLogRow, LogFilter, NewActivityLogEntry};
use std::sync::Arc;

pub mod fixtures;

/// Create a test AppState over an empty in-memory store
#[allow(dead_code)]
pub fn create_test_app_state() -> Arc<AppState> {
    create_test_app_state_with(MemoryActivityLogStore::new())
}

/// Create a test AppState over the given store
pub fn create_test_app_state_with(store: impl ActivityLogStore + 'static) -> Arc<AppState> {
    static INIT: std::sync::Once = std::sync::Once::new();

    INIT.call_once(|| {
        std::env::set_var("APP_ENV", "test");
        mealtrail::utility::logging::setup_logging();
    });

    let config = AppConfig {
        app_url: "http://localhost:8080".to_string(),
        default_page_size: 20,
    };

    AppState::new(Arc::new(store), config)
}

/// Create a test application Router
#[allow(dead_code)]
pub fn create_test_app(state: Arc<AppState>) -> Router {
    mealtrail_api::app::create_router(state)
}

/// Serve the router on an ephemeral local port and return its base URL
#[allow(dead_code)]
pub async fn spawn_test_server(state: Arc<AppState>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    let app = mealtrail_api::app::create_router(state);

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server died");
    });

    format!("http://{}", addr)
}

/// Store whose every operation fails, for storage-unavailable paths
#[allow(dead_code)]
pub struct FailingStore;

impl ActivityLogStore for FailingStore {
    fn list(
        &self,
        _filter: &LogFilter,
        _offset: i64,
        _limit: i64,
    ) -> Result<Vec<ActivityLogRow>, ApiError> {
        Err(ApiError::DatabaseConnection("connection refused".into()))
    }

    fn count(&self, _filter: &LogFilter) -> Result<i64, ApiError> {
        Err(ApiError::DatabaseConnection("connection refused".into()))
    }

    fn distinct_modules(&self) -> Result<Vec<String>, ApiError> {
        Err(ApiError::DatabaseConnection("connection refused".into()))
    }

    fn distinct_sub_modules(&self) -> Result<Vec<String>, ApiError> {
        Err(ApiError::DatabaseConnection("connection refused".into()))
    }

    fn append(&self, _entry: NewActivityLogEntry) -> Result<(), ApiError> {
        Err(ApiError::DatabaseConnection("connection refused".into()))
    }

    fn ping(&self) -> Result<(), ApiError> {
        Err(ApiError::DatabaseConnection("connection refused".into()))
    }
}
