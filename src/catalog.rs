use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// One row of the input catalog: an app, the PubMed id of its publication,
/// and its download count.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub citation: String,
    pub downloads: u64,
}

/// Read the tab-delimited catalog file (header row: name, citation,
/// downloads), preserving row order.
///
/// Row order matters downstream: it fixes the per-item iteration order and
/// therefore which copy of a duplicated record wins the corpus merge.
pub fn read_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<CatalogEntry>> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Failed to open catalog file: {:?}", path))?;

    let mut entries = Vec::new();
    for result in reader.deserialize() {
        let entry: CatalogEntry = result
            .with_context(|| format!("Failed to parse catalog row in {:?}", path))?;
        entries.push(entry);
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_catalog_preserves_order() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "name\tcitation\tdownloads").unwrap();
        writeln!(f, "AppB\t222\t10").unwrap();
        writeln!(f, "AppA\t111\t50").unwrap();
        f.flush().unwrap();

        let entries = read_catalog(f.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "AppB");
        assert_eq!(entries[0].citation, "222");
        assert_eq!(entries[0].downloads, 10);
        assert_eq!(entries[1].name, "AppA");
    }

    #[test]
    fn test_read_catalog_missing_file_is_error() {
        assert!(read_catalog("/nonexistent/catalog.tsv").is_err());
    }

    #[test]
    fn test_read_catalog_bad_downloads_is_error() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "name\tcitation\tdownloads").unwrap();
        writeln!(f, "AppA\t111\tmany").unwrap();
        f.flush().unwrap();

        assert!(read_catalog(f.path()).is_err());
    }
}
