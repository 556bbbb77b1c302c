pub mod aggregate;
pub mod grants;
pub mod merge;

pub use aggregate::count_by_prefix;
pub use grants::normalize_grant;
pub use merge::merge_distinct_records;
