pub mod time;
pub mod truncation;

pub use time::{is_valid_iso_datetime, parse_iso_datetime};
pub use truncation::truncate_for_log;
