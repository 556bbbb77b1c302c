use anyhow::{Context, Result};
use log::info;
use std::time::Instant;

use crate::catalog::read_catalog;
use crate::cli::PipelineArgs;
use crate::commands::{fetch, summarize};
use crate::common::{format_elapsed, setup_logging, FetchStats, OutputPaths, SummarizeStats};
use crate::eutils::EutilsClient;
use crate::medline::FieldTable;

/// Run the full pipeline: fetch -> summarize
pub fn run_pipeline(args: PipelineArgs) -> Result<(FetchStats, SummarizeStats)> {
    let start_time = Instant::now();

    setup_logging(&args.log_level)?;

    info!("Starting app citation statistics pipeline");
    info!("Catalog: {}", args.catalog);
    info!("Output directory: {}", args.outdir);

    let entries = read_catalog(&args.catalog)?;
    let table = FieldTable::medline();
    let paths = OutputPaths::from_outdir(&args.outdir);
    let client = EutilsClient::new(fetch::build_config(
        &args.base_url,
        &args.tool,
        &args.email,
        args.sleep_ms,
    ))?;

    info!("");
    info!("=== STEP 1/2: Fetching records and citation links ===");
    info!("");

    let rt = tokio::runtime::Runtime::new()?;
    let outcome = rt
        .block_on(fetch::fetch_all(
            &client,
            &entries,
            &table,
            &paths,
            args.batch_size,
        ))
        .context("Fetch step failed")?;

    info!(
        "Fetch complete: {} items, {} total citations",
        outcome.stats.items, outcome.stats.total_citations
    );

    info!("");
    info!("=== STEP 2/2: Merging corpus and writing reports ===");
    info!("");

    let summary_stats =
        summarize::summarize_items(&outcome.items, &outcome.batch_files, &table, &paths)
            .context("Summarize step failed")?;

    let total_time = start_time.elapsed();

    info!("");
    info!("==================== PIPELINE COMPLETE ====================");
    info!("Total execution time: {}", format_elapsed(total_time));
    info!("");
    info!("Fetch step:");
    info!("  Catalog items: {}", outcome.stats.items);
    info!("  Records fetched this run: {}", outcome.stats.records_fetched);
    info!("  Batch files written this run: {}", outcome.stats.batch_files_written);
    info!("");
    info!("Summarize step:");
    info!("  Total citations: {}", summary_stats.total_citations);
    info!("  Unique citations: {}", summary_stats.unique_citations);
    info!("  Corpus records: {}", summary_stats.corpus_records);
    info!("  Countries: {}", summary_stats.countries);
    info!("  Grant funders: {}", summary_stats.grants);
    info!("  Journals: {}", summary_stats.journals);
    info!("");
    info!("Output: {:?}", paths.item_report);
    info!("===========================================================");

    Ok((outcome.stats, summary_stats))
}
