pub mod activity_log;
pub mod enum_types;

pub use activity_log::*;
pub use enum_types::*;
