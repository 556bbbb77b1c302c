use anyhow::{Context, Result};
use log::info;
use std::collections::HashSet;
use std::path::PathBuf;

use crate::catalog::{read_catalog, CatalogEntry};
use crate::cli::SummarizeArgs;
use crate::commands::fetch::parse_own_record;
use crate::common::{setup_logging, DataPaths, ItemSummary, OutputPaths, SummarizeStats};
use crate::corpus::{count_by_prefix, merge_distinct_records, normalize_grant};
use crate::eutils::read_cached_citing_ids;
use crate::medline::FieldTable;
use crate::report::{write_count_summary, write_item_report, write_run_summary};

/// Rebuild per-item summaries and the merge input list purely from cache
/// files, without touching the network. Missing caches degrade to empty
/// data so a partial fetch still summarizes.
pub fn load_items_from_cache(
    entries: &[CatalogEntry],
    table: &FieldTable,
    paths: &OutputPaths,
) -> Result<(Vec<ItemSummary>, Vec<PathBuf>)> {
    let mut items = Vec::with_capacity(entries.len());
    let mut batch_files = Vec::new();

    for entry in entries {
        let item_paths = DataPaths::for_item(&paths.data_dir, &entry.name);
        let fields = parse_own_record(&item_paths, table)?;
        let citing_ids = read_cached_citing_ids(&item_paths.cited_json)?;
        if item_paths.cited_papers.exists() {
            batch_files.push(item_paths.cited_papers.clone());
        }
        items.push(ItemSummary {
            entry: entry.clone(),
            fields,
            citing_ids,
        });
    }
    Ok((items, batch_files))
}

/// Merge the citing-record files into the corpus, aggregate field counts,
/// and write every report. The corpus is always rebuilt; its inputs are
/// deterministic cache files, so the merge result is stable.
pub fn summarize_items(
    items: &[ItemSummary],
    batch_files: &[PathBuf],
    table: &FieldTable,
    paths: &OutputPaths,
) -> Result<SummarizeStats> {
    info!("Merging {} citing-record file(s) into corpus", batch_files.len());
    let corpus_records = merge_distinct_records(batch_files, &paths.corpus)?;

    let origin_prefix = table.prefix_for("origin").context("no prefix for 'origin'")?;
    let grant_prefix = table.prefix_for("grant").context("no prefix for 'grant'")?;
    let journal_prefix = table.prefix_for("journal").context("no prefix for 'journal'")?;

    let origin_counts = count_by_prefix(&paths.corpus, origin_prefix, None)?;
    write_count_summary(&paths.origin_counts, "Country", &origin_counts)?;

    let grant_counts = count_by_prefix(&paths.corpus, grant_prefix, Some(normalize_grant))?;
    write_count_summary(&paths.grant_counts, "Grant", &grant_counts)?;

    let journal_counts = count_by_prefix(&paths.corpus, journal_prefix, None)?;
    write_count_summary(&paths.journal_counts, "Journal", &journal_counts)?;

    write_item_report(&paths.item_report, items)?;

    let total_citations: usize = items.iter().map(|i| i.citing_ids.len()).sum();
    let unique_citations: HashSet<&String> =
        items.iter().flat_map(|i| i.citing_ids.iter()).collect();
    write_run_summary(
        &paths.run_summary,
        items.len(),
        total_citations,
        unique_citations.len(),
    )?;

    Ok(SummarizeStats {
        items: items.len(),
        total_citations,
        unique_citations: unique_citations.len(),
        corpus_records,
        countries: origin_counts.len(),
        grants: grant_counts.len(),
        journals: journal_counts.len(),
    })
}

pub fn run_summarize(args: SummarizeArgs) -> Result<SummarizeStats> {
    setup_logging(&args.log_level)?;

    info!("Summarizing cached citation data for catalog: {}", args.catalog);
    let entries = read_catalog(&args.catalog)?;
    let table = FieldTable::medline();
    let paths = OutputPaths::from_outdir(&args.outdir);

    let (items, batch_files) = load_items_from_cache(&entries, &table, &paths)?;
    let stats = summarize_items(&items, &batch_files, &table, &paths)?;

    info!("Corpus records: {}", stats.corpus_records);
    info!("Countries: {}", stats.countries);
    info!("Grant funders: {}", stats.grants);
    info!("Journals: {}", stats.journals);
    info!("Report written to: {:?}", paths.item_report);

    Ok(stats)
}
