pub mod parse;
pub mod tags;

pub use parse::{collect_prefix_values, parse_record_file, FieldMap};
pub use tags::{FieldTable, PMID_PREFIX};
