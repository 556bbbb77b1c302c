use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::tags::FieldTable;

/// Parsed bibliographic fields: label -> values in file order. A record may
/// repeat a field (e.g. several `GR  - ` lines), so every label maps to a list.
pub type FieldMap = HashMap<String, Vec<String>>;

/// Parse a MEDLINE file into a [FieldMap] using the recognized prefixes in
/// `table`.
///
/// The parse is deliberately permissive: lines whose prefix is not in the
/// table are ignored, absent fields simply do not appear in the map, and a
/// file holding several concatenated records is folded into one map. No
/// structural validation is performed.
pub fn parse_record_file<P: AsRef<Path>>(path: P, table: &FieldTable) -> Result<FieldMap> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("Failed to open record file: {:?}", path))?;
    let reader = BufReader::new(file);

    let mut fields = FieldMap::new();
    for line in reader.lines() {
        let line = line?;
        for (prefix, label) in table.entries() {
            if let Some(rest) = line.strip_prefix(prefix) {
                fields
                    .entry(label.to_string())
                    .or_insert_with(Vec::new)
                    .push(rest.trim_end().to_string());
            }
        }
    }
    Ok(fields)
}

/// Collect the values of every line starting with `prefix` across a
/// (possibly multi-record) MEDLINE file, in file order.
pub fn collect_prefix_values<P: AsRef<Path>>(path: P, prefix: &str) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("Failed to open record file: {:?}", path))?;
    let reader = BufReader::new(file);

    let mut values = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if let Some(rest) = line.strip_prefix(prefix) {
            values.push(rest.trim_end().to_string());
        }
    }
    Ok(values)
}
