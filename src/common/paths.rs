use std::path::{Path, PathBuf};

/// Per-item cache file locations under the data directory. The mere
/// existence of each file means "already fetched" and skips the network on
/// later runs.
#[derive(Debug, Clone)]
pub struct DataPaths {
    /// The item's own MEDLINE record.
    pub record: PathBuf,
    /// Raw elink JSON response listing citing publications.
    pub cited_json: PathBuf,
    /// Batched MEDLINE records of all citing publications.
    pub cited_papers: PathBuf,
}

impl DataPaths {
    pub fn for_item<P: AsRef<Path>>(data_dir: P, name: &str) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            record: data_dir.join(format!("{}.medline", name)),
            cited_json: data_dir.join(format!("{}.cited.json", name)),
            cited_papers: data_dir.join(format!("{}.cited_papers.medline", name)),
        }
    }
}

/// Report and corpus file locations under the output directory.
#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub data_dir: PathBuf,
    pub item_report: PathBuf,
    pub corpus: PathBuf,
    pub origin_counts: PathBuf,
    pub grant_counts: PathBuf,
    pub journal_counts: PathBuf,
    pub run_summary: PathBuf,
}

impl OutputPaths {
    pub fn from_outdir<P: AsRef<Path>>(outdir: P) -> Self {
        let outdir = outdir.as_ref();
        Self {
            data_dir: outdir.join("data"),
            item_report: outdir.join("app_summary_report.csv"),
            corpus: outdir.join("unique_set_of_cited_publication.medline"),
            origin_counts: outdir.join("cited_publications_country_of_origin.csv"),
            grant_counts: outdir.join("cited_publications_grants.csv"),
            journal_counts: outdir.join("cited_publications_journal.csv"),
            run_summary: outdir.join("summary.txt"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_paths_for_item() {
        let paths = DataPaths::for_item("/out/data", "AppA");
        assert_eq!(paths.record, PathBuf::from("/out/data/AppA.medline"));
        assert_eq!(paths.cited_json, PathBuf::from("/out/data/AppA.cited.json"));
        assert_eq!(
            paths.cited_papers,
            PathBuf::from("/out/data/AppA.cited_papers.medline")
        );
    }

    #[test]
    fn test_output_paths() {
        let paths = OutputPaths::from_outdir("/out");
        assert_eq!(paths.data_dir, PathBuf::from("/out/data"));
        assert_eq!(paths.item_report, PathBuf::from("/out/app_summary_report.csv"));
        assert_eq!(
            paths.corpus,
            PathBuf::from("/out/unique_set_of_cited_publication.medline")
        );
        assert_eq!(paths.run_summary, PathBuf::from("/out/summary.txt"));
    }
}
