use std::collections::BTreeSet;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use chrono::Utc;
use mealtrail_primitives::error::ApiError;
use mealtrail_primitives::models::{
    ActivityLogEntry, ActivityLogRow, LogFilter, NewActivityLogEntry,
};

use crate::store::ActivityLogStore;

/// In-process store with the same filter, ordering, and facet semantics as
/// the Postgres one. Backs the test harness and embedded setups that have
/// no database at hand.
pub struct MemoryActivityLogStore {
    entries: RwLock<Vec<ActivityLogEntry>>,
    next_seq: AtomicI64,
}

impl MemoryActivityLogStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            next_seq: AtomicI64::new(1),
        }
    }

    /// Pre-populated store; the order of `rows` becomes the insertion order.
    pub fn with_entries(rows: Vec<ActivityLogRow>) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.write() {
            for row in rows {
                let seq = store.next_seq.fetch_add(1, Ordering::SeqCst);
                entries.push(ActivityLogEntry {
                    id: row.id,
                    seq,
                    user_name: row.user_name,
                    restaurant_name: row.restaurant_name,
                    module: row.module,
                    sub_module: row.sub_module,
                    action: row.action,
                    created_at: row.created_at,
                    description: row.description,
                });
            }
        }
        store
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Vec<ActivityLogEntry>>, ApiError> {
        self.entries
            .read()
            .map_err(|_| ApiError::Internal("activity store lock poisoned".into()))
    }

    fn matches(entry: &ActivityLogEntry, filter: &LogFilter) -> bool {
        if let Some(ref module) = filter.module {
            if entry.module != *module {
                return false;
            }
        }
        if let Some(ref sub_module) = filter.sub_module {
            if entry.sub_module != *sub_module {
                return false;
            }
        }
        true
    }
}

impl Default for MemoryActivityLogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityLogStore for MemoryActivityLogStore {
    fn list(
        &self,
        filter: &LogFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<ActivityLogRow>, ApiError> {
        let entries = self.read()?;
        let mut matching: Vec<&ActivityLogEntry> = entries
            .iter()
            .filter(|e| Self::matches(e, filter))
            .collect();
        matching.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.seq.cmp(&a.seq))
        });

        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(matching
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(|e| ActivityLogRow::from(e.clone()))
            .collect())
    }

    fn count(&self, filter: &LogFilter) -> Result<i64, ApiError> {
        let entries = self.read()?;
        Ok(entries.iter().filter(|e| Self::matches(e, filter)).count() as i64)
    }

    fn distinct_modules(&self) -> Result<Vec<String>, ApiError> {
        let entries = self.read()?;
        let distinct: BTreeSet<String> = entries.iter().map(|e| e.module.clone()).collect();
        Ok(distinct.into_iter().collect())
    }

    fn distinct_sub_modules(&self) -> Result<Vec<String>, ApiError> {
        let entries = self.read()?;
        let distinct: BTreeSet<String> = entries.iter().map(|e| e.sub_module.clone()).collect();
        Ok(distinct.into_iter().collect())
    }

    fn append(&self, entry: NewActivityLogEntry) -> Result<(), ApiError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| ApiError::Internal("activity store lock poisoned".into()))?;
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);
        entries.push(ActivityLogEntry {
            id: entry.id,
            seq,
            user_name: entry.user_name,
            restaurant_name: entry.restaurant_name,
            module: entry.module,
            sub_module: entry.sub_module,
            action: entry.action,
            created_at: Utc::now(),
            description: entry.description,
        });
        Ok(())
    }

    fn ping(&self) -> Result<(), ApiError> {
        Ok(())
    }
}
