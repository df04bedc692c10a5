pub mod activity_facets;
pub mod activity_logs;
pub mod health;
