use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use super::client::EutilsClient;

/// The documented efetch ceiling for a single multi-id request. Larger sets
/// require the history server, so id lists are chunked below this instead.
pub const DEFAULT_BATCH_SIZE: usize = 199;

/// Source of MEDLINE record text for a set of ids. Implemented by
/// [EutilsClient]; tests substitute an offline source.
pub trait RecordSource {
    fn fetch_records(&self, ids: &[String]) -> impl std::future::Future<Output = Option<String>>;
}

impl RecordSource for EutilsClient {
    async fn fetch_records(&self, ids: &[String]) -> Option<String> {
        EutilsClient::fetch_records(self, ids).await
    }
}

/// Download records for `ids` into `out`, one fetch per chunk of at most
/// `batch_size` ids. Skipped entirely when `out` already exists.
///
/// The first chunk truncates `out`, later chunks append, so an interrupted
/// run leaves the completed chunks on disk. A failed chunk is logged and
/// skipped without rollback; the missing trailing records are the only
/// failure signal.
pub async fn download_batched<S: RecordSource, P: AsRef<Path>>(
    source: &S,
    ids: &[String],
    out: P,
    batch_size: usize,
) -> Result<()> {
    let out = out.as_ref();
    if out.exists() {
        debug!("Batch file already present, skipping download: {:?}", out);
        return Ok(());
    }

    for (index, chunk) in ids.chunks(batch_size).enumerate() {
        match source.fetch_records(chunk).await {
            Some(text) => {
                let mut file = OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(index == 0)
                    .append(index > 0)
                    .open(out)
                    .with_context(|| format!("Failed to open batch file: {:?}", out))?;
                file.write_all(text.as_bytes())
                    .with_context(|| format!("Failed to write batch file: {:?}", out))?;
            }
            None => {
                warn!(
                    "Batch {} of {} failed for {:?}; continuing without it",
                    index + 1,
                    ids.len().div_ceil(batch_size),
                    out
                );
            }
        }
    }
    Ok(())
}
