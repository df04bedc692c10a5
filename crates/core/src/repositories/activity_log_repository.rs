use diesel::dsl::count_star;
use diesel::prelude::*;
use mealtrail_primitives::error::ApiError;
use mealtrail_primitives::models::{ActivityLogRow, LogFilter, NewActivityLogEntry};
use mealtrail_primitives::schema::activity_logs;

pub struct ActivityLogRepository;

impl ActivityLogRepository {
    pub fn find_page(
        conn: &mut PgConnection,
        filter: &LogFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<ActivityLogRow>, ApiError> {
        let mut query = activity_logs::table
            .select((
                activity_logs::id,
                activity_logs::user_name,
                activity_logs::restaurant_name,
                activity_logs::module,
                activity_logs::sub_module,
                activity_logs::action,
                activity_logs::created_at,
                activity_logs::description,
            ))
            .into_boxed();

        if let Some(ref module) = filter.module {
            query = query.filter(activity_logs::module.eq(module));
        }
        if let Some(ref sub_module) = filter.sub_module {
            query = query.filter(activity_logs::sub_module.eq(sub_module));
        }

        query
            .order((activity_logs::created_at.desc(), activity_logs::seq.desc()))
            .offset(offset)
            .limit(limit)
            .load::<ActivityLogRow>(conn)
            .map_err(ApiError::from)
    }

    pub fn count(conn: &mut PgConnection, filter: &LogFilter) -> Result<i64, ApiError> {
        let mut query = activity_logs::table.select(count_star()).into_boxed();

        if let Some(ref module) = filter.module {
            query = query.filter(activity_logs::module.eq(module));
        }
        if let Some(ref sub_module) = filter.sub_module {
            query = query.filter(activity_logs::sub_module.eq(sub_module));
        }

        query.get_result::<i64>(conn).map_err(ApiError::from)
    }

    pub fn distinct_modules(conn: &mut PgConnection) -> Result<Vec<String>, ApiError> {
        activity_logs::table
            .select(activity_logs::module)
            .distinct()
            .order(activity_logs::module.asc())
            .load::<String>(conn)
            .map_err(ApiError::from)
    }

    pub fn distinct_sub_modules(conn: &mut PgConnection) -> Result<Vec<String>, ApiError> {
        activity_logs::table
            .select(activity_logs::sub_module)
            .distinct()
            .order(activity_logs::sub_module.asc())
            .load::<String>(conn)
            .map_err(ApiError::from)
    }

    pub fn create(conn: &mut PgConnection, entry: NewActivityLogEntry) -> Result<(), ApiError> {
        diesel::insert_into(activity_logs::table)
            .values(&entry)
            .execute(conn)
            .map_err(ApiError::Database)?;
        Ok(())
    }
}
