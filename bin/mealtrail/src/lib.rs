mod observability;

pub mod utility;

pub use mealtrail_primitives::error::ApiError;

use crate::utility::db_pool::create_db_pool;
use crate::utility::logging::setup_logging;
use crate::utility::server::serve;
use crate::utility::tasks::{build_router, initialize_system, load_env, run_migrations};
use eyre::Report;
use mealtrail_core::app_state::AppState;
use mealtrail_core::store::PgActivityLogStore;
use mealtrail_primitives::models::app_config::AppConfig;
use std::sync::Arc;
use tracing::info;

pub async fn run() -> Result<(), Report> {
    // 1. load environment variables
    load_env();

    // 2. initialize logging first (so we can log everything else)
    setup_logging();

    info!("Starting mealtrail activity log service...");

    // 3. load configuration
    let config = AppConfig::from_env()?;

    // 4. create database connection pool
    let pool = create_db_pool()?;

    // 5. bring the schema up to date
    run_migrations(&pool)?;

    // 6. build application state over the Postgres store
    let store = Arc::new(PgActivityLogStore::new(pool));
    let state = AppState::new(store, config);

    // 7. probe the store (non-fatal; queries degrade until it returns)
    initialize_system(&state);

    // 8. initialize metrics
    let (metric_layer, metric_handle) = observability::metrics::setup_metrics();

    // 9. build axum router
    let app = build_router(state.clone(), metric_layer, metric_handle)?;

    // 10. start HTTP server
    serve(app).await?;

    info!("mealtrail shut down gracefully");
    Ok(())
}
