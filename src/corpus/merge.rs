use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::common::create_count_progress_bar;
use crate::medline::PMID_PREFIX;

/// Merge multi-record MEDLINE files into one corpus with at most one record
/// per PMID.
///
/// Inputs are streamed in the given order; a `PMID-` line opens a record
/// block and an already-seen id suppresses every line of that block, so the
/// skip applies at record granularity and retained records stay complete.
/// The first occurrence across the ordered inputs wins; callers pass inputs
/// in catalog row order to keep the output stable across runs.
///
/// Returns the number of distinct records written.
pub fn merge_distinct_records(inputs: &[PathBuf], out: &Path) -> Result<usize> {
    let mut seen: HashSet<String> = HashSet::new();
    let out_file =
        File::create(out).with_context(|| format!("Failed to create corpus file: {:?}", out))?;
    let mut writer = BufWriter::new(out_file);

    let pb = create_count_progress_bar(inputs.len() as u64);
    for input in inputs {
        let file =
            File::open(input).with_context(|| format!("Failed to open input: {:?}", input))?;
        let reader = BufReader::new(file);

        let mut skip_record = false;
        for line in reader.lines() {
            let line = line?;
            if let Some(id) = line.strip_prefix(PMID_PREFIX) {
                let id = id.trim_end().to_string();
                skip_record = !seen.insert(id);
            }
            if !skip_record {
                writeln!(writer, "{}", line)?;
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();
    writer.flush()?;
    Ok(seen.len())
}
