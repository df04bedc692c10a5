use chrono::{DateTime, Duration, TimeZone, Utc};
use mealtrail_primitives::models::{ActionKind, ActivityLogRow};
use uuid::Uuid;

#[allow(dead_code)]
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 7, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

#[allow(dead_code)]
pub fn row(
    user_name: &str,
    restaurant_name: Option<&str>,
    module: &str,
    sub_module: &str,
    action: ActionKind,
    created_at: DateTime<Utc>,
) -> ActivityLogRow {
    ActivityLogRow {
        id: Uuid::new_v4(),
        user_name: user_name.to_string(),
        restaurant_name: restaurant_name.map(|s| s.to_string()),
        module: module.to_string(),
        sub_module: sub_module.to_string(),
        action,
        created_at,
        description: None,
    }
}

/// Six entries across three modules, each a minute apart; the Refunds
/// entry is the newest.
#[allow(dead_code)]
pub fn marketplace_rows() -> Vec<ActivityLogRow> {
    let t = base_time();
    vec![
        row(
            "Amara Obi",
            Some("Mama Put Kitchen"),
            "Orders",
            "Order Management",
            ActionKind::Approve,
            t,
        ),
        row(
            "Dante Rossi",
            Some("Trattoria Dante"),
            "Payments",
            "Withdrawals",
            ActionKind::Create,
            t + Duration::minutes(1),
        ),
        row(
            "Platform Ops",
            None,
            "Payments",
            "Withdrawals",
            ActionKind::Approve,
            t + Duration::minutes(2),
        ),
        row(
            "Lena Fischer",
            Some("Berlin Doner Haus"),
            "Customers",
            "Profiles",
            ActionKind::Update,
            t + Duration::minutes(3),
        ),
        row(
            "Platform Ops",
            None,
            "Payments",
            "Disputes",
            ActionKind::Reject,
            t + Duration::minutes(4),
        ),
        row(
            "Sofia Mendes",
            Some("Cantina do Porto"),
            "Orders",
            "Refunds",
            ActionKind::Create,
            t + Duration::minutes(5),
        ),
    ]
}
