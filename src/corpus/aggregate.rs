use anyhow::Result;
use std::collections::HashMap;
use std::path::Path;

use crate::medline::collect_prefix_values;

/// Count occurrences of every value for lines starting with `prefix` across
/// a (multi-record) corpus file.
///
/// Each matching line counts independently, so a record with three grant
/// lines contributes three counts. When `normalize` is given, every raw
/// value is passed through it before counting; distinct raw strings may
/// collapse into one bucket. Results are ordered by descending count, then
/// value, so the output is deterministic.
pub fn count_by_prefix(
    corpus: &Path,
    prefix: &str,
    normalize: Option<fn(&str) -> String>,
) -> Result<Vec<(String, u64)>> {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for value in collect_prefix_values(corpus, prefix)? {
        let bucket = match normalize {
            Some(f) => f(&value),
            None => value,
        };
        *counts.entry(bucket).or_insert(0) += 1;
    }

    let mut rows: Vec<(String, u64)> = counts.into_iter().collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::normalize_grant;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_corpus(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn test_counts_each_line_independently() {
        let f = write_corpus(
            "PMID- 1\nPL  - United States\nPMID- 2\nPL  - England\nPMID- 3\nPL  - United States\n",
        );
        let rows = count_by_prefix(f.path(), "PL  - ", None).unwrap();
        assert_eq!(
            rows,
            vec![
                ("United States".to_string(), 2),
                ("England".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_multi_valued_record_counts_per_instance() {
        let f = write_corpus("PMID- 1\nGR  - a\nGR  - a\nGR  - b\n");
        let rows = count_by_prefix(f.path(), "GR  - ", None).unwrap();
        assert_eq!(rows, vec![("a".to_string(), 2), ("b".to_string(), 1)]);
    }

    #[test]
    fn test_normalization_collapses_buckets() {
        let f = write_corpus(
            "GR  - X NIH HHS/United States\nGR  - X NIH HHS/United States\nGR  - Y NIH HHS/United States\n",
        );

        let raw = count_by_prefix(f.path(), "GR  - ", None).unwrap();
        assert_eq!(raw.len(), 2);

        let normalized = count_by_prefix(f.path(), "GR  - ", Some(normalize_grant)).unwrap();
        assert_eq!(
            normalized,
            vec![("X".to_string(), 2), ("Y".to_string(), 1)]
        );
        // total occurrences are preserved across normalization
        let raw_total: u64 = raw.iter().map(|(_, c)| c).sum();
        let norm_total: u64 = normalized.iter().map(|(_, c)| c).sum();
        assert_eq!(raw_total, norm_total);
    }

    #[test]
    fn test_ties_break_by_value() {
        let f = write_corpus("TA  - B\nTA  - A\n");
        let rows = count_by_prefix(f.path(), "TA  - ", None).unwrap();
        assert_eq!(rows, vec![("A".to_string(), 1), ("B".to_string(), 1)]);
    }

    #[test]
    fn test_empty_corpus() {
        let f = write_corpus("");
        assert!(count_by_prefix(f.path(), "PL  - ", None).unwrap().is_empty());
    }
}
