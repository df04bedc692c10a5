use crate::app_state::AppState;
use mealtrail_primitives::error::ApiError;
use mealtrail_primitives::models::{
    ActionKind, FacetsResponse, LogFilter, LogPageResponse, NewActivityLogEntry, PageRequest,
};
use uuid::Uuid;

pub struct ActivityLogService;

impl ActivityLogService {
    /// One page of matching entries, most recent first, plus the total
    /// match count so the caller can compute page counts. Pages past the
    /// end come back empty, not as an error.
    pub fn list_entries(
        state: &AppState,
        filter: &LogFilter,
        page: PageRequest,
    ) -> Result<LogPageResponse, ApiError> {
        page.validate()?;

        let total_count = state.store.count(filter)?;
        let entries = if page.offset() >= total_count {
            Vec::new()
        } else {
            state.store.list(filter, page.offset(), page.size)?
        };

        Ok(LogPageResponse {
            entries,
            total_count,
        })
    }

    /// Distinct module and sub-module values for the filter dropdowns.
    /// Served from the in-process cache; an empty collection yields empty
    /// facet lists.
    pub fn list_facets(state: &AppState) -> Result<FacetsResponse, ApiError> {
        state.facets.get_or_refresh(state.store.as_ref())
    }

    /// Append one audit entry. This is the hook action-auditing
    /// collaborators call whenever a mutating operation happens elsewhere
    /// in the marketplace.
    pub fn record(
        state: &AppState,
        user_name: &str,
        restaurant_name: Option<&str>,
        module: &str,
        sub_module: &str,
        action: ActionKind,
        description: Option<&str>,
    ) -> Result<(), ApiError> {
        let entry = NewActivityLogEntry {
            id: Uuid::new_v4(),
            user_name: user_name.to_string(),
            restaurant_name: restaurant_name.map(|s| s.to_string()),
            module: module.to_string(),
            sub_module: sub_module.to_string(),
            action,
            description: description.map(|s| s.to_string()),
        };

        state.store.append(entry)?;
        state.facets.invalidate();
        Ok(())
    }
}
