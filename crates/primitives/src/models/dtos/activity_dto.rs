use crate::error::ApiError;
use crate::models::entities::activity_log::ActivityLogEntry;
use crate::models::entities::enum_types::ActionKind;
use chrono::{DateTime, Utc};
use diesel::Queryable;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// An entry as it goes over the wire. Same shape as the entity minus the
/// internal insertion counter.
#[derive(Debug, Clone, Queryable, Serialize, Deserialize, ToSchema)]
pub struct ActivityLogRow {
    pub id: Uuid,
    pub user_name: String,
    pub restaurant_name: Option<String>,
    pub module: String,
    pub sub_module: String,
    pub action: ActionKind,
    pub created_at: DateTime<Utc>,
    pub description: Option<String>,
}

impl From<ActivityLogEntry> for ActivityLogRow {
    fn from(entry: ActivityLogEntry) -> Self {
        Self {
            id: entry.id,
            user_name: entry.user_name,
            restaurant_name: entry.restaurant_name,
            module: entry.module,
            sub_module: entry.sub_module,
            action: entry.action,
            created_at: entry.created_at,
            description: entry.description,
        }
    }
}

/// Equality filters on the two categorical tags. Both are exact,
/// case-sensitive matches. A sub-module filter without a module filter
/// applies against all modules; keeping the pair consistent is the
/// caller's job (see `LogViewState`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogFilter {
    pub module: Option<String>,
    pub sub_module: Option<String>,
}

/// Zero-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub index: i64,
    pub size: i64,
}

impl PageRequest {
    pub const MAX_SIZE: i64 = 100;

    pub fn new(index: i64, size: i64) -> Self {
        Self { index, size }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        if self.index < 0 {
            return Err(ApiError::InvalidArgument(format!(
                "page index must be >= 0, got {}",
                self.index
            )));
        }
        if self.size < 1 || self.size > Self::MAX_SIZE {
            return Err(ApiError::InvalidArgument(format!(
                "page size must be between 1 and {}, got {}",
                Self::MAX_SIZE,
                self.size
            )));
        }
        Ok(())
    }

    pub fn offset(&self) -> i64 {
        self.index.saturating_mul(self.size)
    }
}

/// Query string of `GET /api/activity/logs`.
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ActivityLogQuery {
    /// Restrict to entries whose module equals this value exactly.
    pub module: Option<String>,
    /// Restrict to entries whose sub-module equals this value exactly.
    pub sub_module: Option<String>,
    /// Zero-based page index. Defaults to 0.
    #[validate(range(min = 0))]
    pub page: Option<i64>,
    /// Page size, 1..=100. Defaults to the configured page size.
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
}

impl ActivityLogQuery {
    pub fn filter(&self) -> LogFilter {
        LogFilter {
            module: self.module.clone(),
            sub_module: self.sub_module.clone(),
        }
    }

    pub fn page_request(&self, default_size: i64) -> PageRequest {
        PageRequest::new(self.page.unwrap_or(0), self.limit.unwrap_or(default_size))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LogPageResponse {
    /// Most recent first.
    pub entries: Vec<ActivityLogRow>,
    /// Matching entries ignoring pagination, for total-page math.
    pub total_count: i64,
}

impl LogPageResponse {
    /// The display fallback used when storage is unreachable.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            total_count: 0,
        }
    }
}

/// Distinct values available for the two filter dropdowns, sorted
/// lexicographically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FacetsResponse {
    pub modules: Vec<String>,
    pub sub_modules: Vec<String>,
}

impl FacetsResponse {
    pub fn empty() -> Self {
        Self::default()
    }
}
