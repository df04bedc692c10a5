use std::sync::Arc;

use crate::services::facet_cache::FacetCache;
use crate::store::ActivityLogStore;

pub use mealtrail_primitives::models::app_config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ActivityLogStore>,
    pub facets: Arc<FacetCache>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn ActivityLogStore>, config: AppConfig) -> Arc<Self> {
        Arc::new(Self {
            store,
            facets: Arc::new(FacetCache::new()),
            config,
        })
    }
}
