pub mod batch;
pub mod client;
pub mod elink;

pub use batch::{download_batched, RecordSource, DEFAULT_BATCH_SIZE};
pub use client::{EutilsClient, EutilsConfig};
pub use elink::{citing_ids_from_json, read_cached_citing_ids, resolve_citing_ids};
