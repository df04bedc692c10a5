pub mod activity_log_service;
pub mod facet_cache;
