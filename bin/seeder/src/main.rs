use diesel::pg::PgConnection;
use diesel::prelude::*;
use dotenvy::dotenv;
use mealtrail_primitives::models::{ActionKind, NewActivityLogEntry};
use mealtrail_primitives::schema::activity_logs;
use std::env;
use uuid::Uuid;

fn establish_connection() -> PgConnection {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    PgConnection::establish(&database_url)
        .unwrap_or_else(|_| panic!("Error connecting to {}", database_url))
}

fn main() {
    dotenv().ok();
    println!("🌱 Seeding activity logs...");

    let mut conn = establish_connection();

    clean_db(&mut conn);
    let seeded = seed_entries(&mut conn);

    println!("✅ Seeded {} activity log entries!", seeded);
}

fn clean_db(conn: &mut PgConnection) {
    use diesel::sql_query;
    println!("🧹 Cleaning activity_logs...");
    sql_query("TRUNCATE activity_logs RESTART IDENTITY")
        .execute(conn)
        .expect("Error truncating activity_logs");
}

fn seed_entries(conn: &mut PgConnection) -> usize {
    let entries = sample_entries();

    // inserted one at a time so seq reflects this order
    for entry in &entries {
        diesel::insert_into(activity_logs::table)
            .values(entry)
            .execute(conn)
            .expect("Error inserting activity log entry");
    }

    entries.len()
}

fn entry(
    user_name: &str,
    restaurant_name: Option<&str>,
    module: &str,
    sub_module: &str,
    action: ActionKind,
    description: Option<&str>,
) -> NewActivityLogEntry {
    NewActivityLogEntry {
        id: Uuid::new_v4(),
        user_name: user_name.to_string(),
        restaurant_name: restaurant_name.map(|s| s.to_string()),
        module: module.to_string(),
        sub_module: sub_module.to_string(),
        action,
        description: description.map(|s| s.to_string()),
    }
}

fn sample_entries() -> Vec<NewActivityLogEntry> {
    vec![
        entry(
            "Amara Obi",
            Some("Mama Put Kitchen"),
            "Orders",
            "Order Management",
            ActionKind::Approve,
            Some("Approved order #10482 after payment confirmation"),
        ),
        entry(
            "Amara Obi",
            Some("Mama Put Kitchen"),
            "Orders",
            "Refunds",
            ActionKind::Create,
            Some("Opened refund request for a cancelled delivery"),
        ),
        entry(
            "Dante Rossi",
            Some("Trattoria Dante"),
            "Payments",
            "Withdrawals",
            ActionKind::Create,
            Some("Requested withdrawal of weekly settlement"),
        ),
        entry(
            "Platform Ops",
            None,
            "Payments",
            "Withdrawals",
            ActionKind::Approve,
            Some("Approved settlement withdrawal batch"),
        ),
        entry(
            "Platform Ops",
            None,
            "Payments",
            "Disputes",
            ActionKind::Reject,
            Some("Rejected chargeback dispute: evidence insufficient"),
        ),
        entry(
            "Lena Fischer",
            Some("Berlin Doner Haus"),
            "Customers",
            "Profiles",
            ActionKind::Update,
            Some("Updated customer contact details on request"),
        ),
        entry(
            "Lena Fischer",
            Some("Berlin Doner Haus"),
            "Customers",
            "Reviews",
            ActionKind::Delete,
            Some("Removed review flagged as spam"),
        ),
        entry(
            "Platform Ops",
            None,
            "Subscriptions",
            "Plans",
            ActionKind::Create,
            Some("Published new premium listing plan"),
        ),
        entry(
            "Dante Rossi",
            Some("Trattoria Dante"),
            "Subscriptions",
            "Billing",
            ActionKind::Update,
            Some("Switched billing cycle to monthly"),
        ),
        entry(
            "Sofia Mendes",
            Some("Cantina do Porto"),
            "Support",
            "Tickets",
            ActionKind::Create,
            Some("Opened ticket about delayed payout"),
        ),
        entry(
            "Platform Ops",
            None,
            "Support",
            "Tickets",
            ActionKind::Update,
            Some("Escalated payout ticket to finance"),
        ),
        entry(
            "Sofia Mendes",
            Some("Cantina do Porto"),
            "Orders",
            "Order Management",
            ActionKind::Other,
            Some("Exported weekly order report"),
        ),
    ]
}
