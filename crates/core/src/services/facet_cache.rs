use std::sync::RwLock;

use mealtrail_primitives::error::ApiError;
use mealtrail_primitives::models::FacetsResponse;
use tracing::debug;

use crate::store::ActivityLogStore;

/// Facet lists recomputed from the store on demand and invalidated on
/// every append. A poisoned lock degrades to recomputation.
pub struct FacetCache {
    inner: RwLock<Option<FacetsResponse>>,
}

impl FacetCache {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(None),
        }
    }

    pub fn get_or_refresh(&self, store: &dyn ActivityLogStore) -> Result<FacetsResponse, ApiError> {
        if let Ok(guard) = self.inner.read() {
            if let Some(cached) = guard.as_ref() {
                return Ok(cached.clone());
            }
        }

        let facets = FacetsResponse {
            modules: store.distinct_modules()?,
            sub_modules: store.distinct_sub_modules()?,
        };
        debug!(
            modules = facets.modules.len(),
            sub_modules = facets.sub_modules.len(),
            "refreshed facet cache"
        );

        if let Ok(mut guard) = self.inner.write() {
            *guard = Some(facets.clone());
        }
        Ok(facets)
    }

    pub fn invalidate(&self) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = None;
        }
    }
}

impl Default for FacetCache {
    fn default() -> Self {
        Self::new()
    }
}
