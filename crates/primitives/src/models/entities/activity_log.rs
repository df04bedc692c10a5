use crate::models::entities::enum_types::ActionKind;
use crate::schema::activity_logs;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One immutable audit record of a user action. `seq` is the insertion
/// counter used to break ordering ties between equal timestamps; it never
/// leaves the storage layer.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Serialize, Deserialize)]
#[diesel(table_name = activity_logs)]
pub struct ActivityLogEntry {
    pub id: Uuid,
    pub seq: i64,
    pub user_name: String,
    pub restaurant_name: Option<String>,
    pub module: String,
    pub sub_module: String,
    pub action: ActionKind,
    pub created_at: DateTime<Utc>,
    pub description: Option<String>,
}

/// `seq` and `created_at` are assigned by the database.
#[derive(Debug, Clone, Insertable, Deserialize)]
#[diesel(table_name = activity_logs)]
pub struct NewActivityLogEntry {
    pub id: Uuid,
    pub user_name: String,
    pub restaurant_name: Option<String>,
    pub module: String,
    pub sub_module: String,
    pub action: ActionKind,
    pub description: Option<String>,
}
