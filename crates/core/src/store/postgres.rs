use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::PgConnection;
use mealtrail_primitives::error::ApiError;
use mealtrail_primitives::models::{ActivityLogRow, LogFilter, NewActivityLogEntry};

use crate::repositories::activity_log_repository::ActivityLogRepository;
use crate::store::ActivityLogStore;

pub type DbPool = Pool<ConnectionManager<PgConnection>>;

#[derive(Clone)]
pub struct PgActivityLogStore {
    pool: DbPool,
}

impl PgActivityLogStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(
        &self,
    ) -> Result<diesel::r2d2::PooledConnection<ConnectionManager<PgConnection>>, ApiError> {
        self.pool
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))
    }
}

impl ActivityLogStore for PgActivityLogStore {
    fn list(
        &self,
        filter: &LogFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<ActivityLogRow>, ApiError> {
        let mut conn = self.conn()?;
        ActivityLogRepository::find_page(&mut conn, filter, offset, limit)
    }

    fn count(&self, filter: &LogFilter) -> Result<i64, ApiError> {
        let mut conn = self.conn()?;
        ActivityLogRepository::count(&mut conn, filter)
    }

    fn distinct_modules(&self) -> Result<Vec<String>, ApiError> {
        let mut conn = self.conn()?;
        ActivityLogRepository::distinct_modules(&mut conn)
    }

    fn distinct_sub_modules(&self) -> Result<Vec<String>, ApiError> {
        let mut conn = self.conn()?;
        ActivityLogRepository::distinct_sub_modules(&mut conn)
    }

    fn append(&self, entry: NewActivityLogEntry) -> Result<(), ApiError> {
        let mut conn = self.conn()?;
        ActivityLogRepository::create(&mut conn, entry)
    }

    fn ping(&self) -> Result<(), ApiError> {
        let mut conn = self.conn()?;
        diesel::sql_query("SELECT 1")
            .execute(&mut conn)
            .map_err(ApiError::Database)?;
        Ok(())
    }
}
