use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::catalog::{read_catalog, CatalogEntry};
use crate::cli::FetchArgs;
use crate::common::{
    create_count_progress_bar, setup_logging, DataPaths, FetchStats, ItemSummary, OutputPaths,
};
use crate::eutils::{download_batched, resolve_citing_ids, EutilsClient, EutilsConfig};
use crate::medline::{parse_record_file, FieldMap, FieldTable};

/// Everything the fetch stage produced, handed to the summarize stage by
/// the pipeline so cached files need not be re-read.
pub struct FetchOutcome {
    pub items: Vec<ItemSummary>,
    /// Citing-record files that exist on disk, in catalog order.
    pub batch_files: Vec<PathBuf>,
    pub stats: FetchStats,
}

pub fn build_config(base_url: &str, tool: &str, email: &str, sleep_ms: u64) -> EutilsConfig {
    let mut config = EutilsConfig::new(email);
    config.base_url = base_url.to_string();
    config.tool = tool.to_string();
    config.delay = Duration::from_millis(sleep_ms);
    config
}

/// Fetch all per-item data, skipping anything already cached. Items are
/// processed strictly one at a time; the client's pre-call delay is the
/// only rate limiting.
pub async fn fetch_all(
    client: &EutilsClient,
    entries: &[CatalogEntry],
    table: &FieldTable,
    paths: &OutputPaths,
    batch_size: usize,
) -> Result<FetchOutcome> {
    fs::create_dir_all(&paths.data_dir)
        .with_context(|| format!("Failed to create data directory: {:?}", paths.data_dir))?;

    let mut items = Vec::with_capacity(entries.len());
    let mut batch_files = Vec::new();
    let mut stats = FetchStats {
        items: entries.len(),
        ..FetchStats::default()
    };
    let mut unique_citations: HashSet<String> = HashSet::new();

    let pb = create_count_progress_bar(entries.len() as u64);
    for entry in entries {
        debug!("Examining: {}", entry.name);
        let item_paths = DataPaths::for_item(&paths.data_dir, &entry.name);

        // the item's own record
        if !item_paths.record.exists() {
            match client.fetch_records(std::slice::from_ref(&entry.citation)).await {
                Some(text) => {
                    fs::write(&item_paths.record, text).with_context(|| {
                        format!("Failed to write record file: {:?}", item_paths.record)
                    })?;
                    stats.records_fetched += 1;
                }
                None => warn!("No record obtained for {} (id {})", entry.name, entry.citation),
            }
        }

        // ids of publications citing it
        let citing_ids = resolve_citing_ids(client, &entry.citation, &item_paths.cited_json).await?;
        stats.total_citations += citing_ids.len();
        unique_citations.extend(citing_ids.iter().cloned());

        // their records, batched; nothing is written for an empty citation set
        if !citing_ids.is_empty() {
            if !item_paths.cited_papers.exists() {
                download_batched(client, &citing_ids, &item_paths.cited_papers, batch_size).await?;
                stats.batch_files_written += 1;
            }
            if item_paths.cited_papers.exists() {
                batch_files.push(item_paths.cited_papers.clone());
            }
        }

        let fields = parse_own_record(&item_paths, table)?;
        items.push(ItemSummary {
            entry: entry.clone(),
            fields,
            citing_ids,
        });
        pb.inc(1);
    }
    pb.finish_and_clear();

    stats.unique_citations = unique_citations.len();
    Ok(FetchOutcome {
        items,
        batch_files,
        stats,
    })
}

/// Parse the item's own record, degrading to empty fields when the record
/// fetch failed and left no cache file.
pub fn parse_own_record(item_paths: &DataPaths, table: &FieldTable) -> Result<FieldMap> {
    if item_paths.record.exists() {
        parse_record_file(&item_paths.record, table)
    } else {
        warn!("Record file missing, no bibliographic fields: {:?}", item_paths.record);
        Ok(FieldMap::new())
    }
}

pub fn run_fetch(args: FetchArgs) -> Result<FetchStats> {
    setup_logging(&args.log_level)?;

    info!("Fetching citation data for catalog: {}", args.catalog);
    let entries = read_catalog(&args.catalog)?;
    let table = FieldTable::medline();
    let paths = OutputPaths::from_outdir(&args.outdir);
    let client = EutilsClient::new(build_config(
        &args.base_url,
        &args.tool,
        &args.email,
        args.sleep_ms,
    ))?;

    let rt = tokio::runtime::Runtime::new()?;
    let outcome = rt.block_on(fetch_all(&client, &entries, &table, &paths, args.batch_size))?;

    info!("Catalog items: {}", outcome.stats.items);
    info!("Records fetched this run: {}", outcome.stats.records_fetched);
    info!("Batch files written this run: {}", outcome.stats.batch_files_written);
    info!("Total citations: {}", outcome.stats.total_citations);
    info!("Total unique citations: {}", outcome.stats.unique_citations);

    Ok(outcome.stats)
}
