use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::common::ItemSummary;

/// One row of the per-item report CSV.
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    #[serde(rename = "App")]
    app: &'a str,
    #[serde(rename = "NumberDownloads")]
    downloads: u64,
    #[serde(rename = "CitationId")]
    citation_id: &'a str,
    #[serde(rename = "NumberCitations")]
    citations: usize,
    #[serde(rename = "Origin")]
    origin: String,
    #[serde(rename = "Journal")]
    journal: String,
    #[serde(rename = "PublishDate")]
    publish_date: String,
}

/// Write the per-item summary report, one row per catalog item in catalog
/// order. The bibliographic columns come from the item's own record; an
/// item whose record fetch failed gets empty strings there.
pub fn write_item_report<P: AsRef<Path>>(out: P, items: &[ItemSummary]) -> Result<()> {
    let out = out.as_ref();
    let mut writer = csv::Writer::from_path(out)
        .with_context(|| format!("Failed to create report file: {:?}", out))?;

    for item in items {
        writer.serialize(ReportRow {
            app: &item.entry.name,
            downloads: item.entry.downloads,
            citation_id: &item.entry.citation,
            citations: item.citing_ids.len(),
            origin: item.joined_field("origin"),
            journal: item.joined_field("journal"),
            publish_date: item.joined_field("publishdate"),
        })?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a two-column frequency CSV: `label`,Count.
pub fn write_count_summary<P: AsRef<Path>>(
    out: P,
    label: &str,
    counts: &[(String, u64)],
) -> Result<()> {
    let out = out.as_ref();
    let mut writer = csv::Writer::from_path(out)
        .with_context(|| format!("Failed to create count file: {:?}", out))?;

    writer.write_record([label, "Count"])?;
    for (value, count) in counts {
        writer.write_record([value.as_str(), count.to_string().as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the plain-text run summary.
pub fn write_run_summary<P: AsRef<Path>>(
    out: P,
    items: usize,
    total_citations: usize,
    unique_citations: usize,
) -> Result<()> {
    let out = out.as_ref();
    let file = File::create(out)
        .with_context(|| format!("Failed to create summary file: {:?}", out))?;
    let mut writer = BufWriter::new(file);

    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    writeln!(writer, "Time: {}", OffsetDateTime::now_utc().format(&format)?)?;
    writeln!(writer, "Number of App Publications: {}", items)?;
    writeln!(writer, "Total citations: {}", total_citations)?;
    writeln!(writer, "Total unique citations: {}", unique_citations)?;
    writer.flush()?;
    Ok(())
}
