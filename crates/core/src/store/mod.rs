pub mod memory;
pub mod postgres;

pub use memory::MemoryActivityLogStore;
pub use postgres::PgActivityLogStore;

use mealtrail_primitives::error::ApiError;
use mealtrail_primitives::models::{ActivityLogRow, LogFilter, NewActivityLogEntry};

/// Read-mostly access to the activity-log collection. Entries are
/// append-only; nothing here updates or deletes.
pub trait ActivityLogStore: Send + Sync {
    /// Matching entries ordered by `created_at` descending, insertion
    /// order descending on ties, with skip/limit pagination applied.
    fn list(
        &self,
        filter: &LogFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<ActivityLogRow>, ApiError>;

    /// Matching entries ignoring pagination.
    fn count(&self, filter: &LogFilter) -> Result<i64, ApiError>;

    /// Distinct module values, sorted ascending.
    fn distinct_modules(&self) -> Result<Vec<String>, ApiError>;

    /// Distinct sub-module values across all modules, sorted ascending.
    fn distinct_sub_modules(&self) -> Result<Vec<String>, ApiError>;

    fn append(&self, entry: NewActivityLogEntry) -> Result<(), ApiError>;

    fn ping(&self) -> Result<(), ApiError>;
}
