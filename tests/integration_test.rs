use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

/// Write the tab-delimited catalog file used by the offline tests.
fn write_catalog(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("catalog.tsv");
    let content = "name\tcitation\tdownloads\n\
AppA\t111\t500\n\
AppB\t222\t40\n\
AppC\t333\t7\n";
    fs::write(&path, content).unwrap();
    path
}

/// Pre-seed every cache file a fetch run would have produced, so the
/// pipeline resolves everything from disk and never touches the network.
fn seed_cache(outdir: &Path) {
    let data = outdir.join("data");
    fs::create_dir_all(&data).unwrap();

    // AppA: own record plus two citing publications
    fs::write(
        data.join("AppA.medline"),
        "PMID- 111\nTA  - Nat Methods\nDP  - 2019 Mar\nPL  - United States\n",
    )
    .unwrap();
    fs::write(
        data.join("AppA.cited.json"),
        r#"{"linksets": [{"linksetdbs": [{"links": ["901", "902"]}]}]}"#,
    )
    .unwrap();
    fs::write(
        data.join("AppA.cited_papers.medline"),
        "PMID- 901\nTA  - Bioinformatics\nPL  - England\n\
GR  - X NIH HHS/United States\n\
PMID- 902\nTA  - Nat Methods\nPL  - United States\n\
GR  - Y NIH HHS/United States\n",
    )
    .unwrap();

    // AppB: empty linksets, zero citations
    fs::write(
        data.join("AppB.medline"),
        "PMID- 222\nTA  - PLoS One\nDP  - 2020 Jan\nPL  - England\n",
    )
    .unwrap();
    fs::write(data.join("AppB.cited.json"), r#"{"linksets": []}"#).unwrap();

    // AppC: one citing publication shared with AppA (dedup across files)
    fs::write(
        data.join("AppC.medline"),
        "PMID- 333\nTA  - BMC Bioinformatics\nDP  - 2018\nPL  - Germany\n",
    )
    .unwrap();
    fs::write(
        data.join("AppC.cited.json"),
        r#"{"linksets": [{"linksetdbs": [{"links": ["902"]}]}]}"#,
    )
    .unwrap();
    fs::write(
        data.join("AppC.cited_papers.medline"),
        "PMID- 902\nTA  - Nat Methods Duplicate Copy\nPL  - France\n",
    )
    .unwrap();
}

fn run_pipeline(catalog: &Path, outdir: &Path) {
    let status = Command::new("cargo")
        .args([
            "run",
            "--quiet",
            "--",
            "pipeline",
            "--catalog",
            catalog.to_str().unwrap(),
            "--outdir",
            outdir.to_str().unwrap(),
            "--email",
            "test@example.org",
            "--sleep-ms",
            "0",
            "--log-level",
            "ERROR",
        ])
        .status()
        .expect("Failed to run pipeline");
    assert!(status.success(), "Pipeline run should succeed");
}

#[test]
fn test_fetch_help() {
    let status = Command::new("cargo")
        .args(["run", "--quiet", "--", "fetch", "--help"])
        .status()
        .expect("Failed to run fetch --help");
    assert!(status.success(), "fetch --help should succeed");
}

#[test]
fn test_summarize_help() {
    let status = Command::new("cargo")
        .args(["run", "--quiet", "--", "summarize", "--help"])
        .status()
        .expect("Failed to run summarize --help");
    assert!(status.success(), "summarize --help should succeed");
}

#[test]
fn test_pipeline_help() {
    let status = Command::new("cargo")
        .args(["run", "--quiet", "--", "pipeline", "--help"])
        .status()
        .expect("Failed to run pipeline --help");
    assert!(status.success(), "pipeline --help should succeed");
}

#[test]
fn test_pipeline_offline_from_seeded_cache() {
    let dir = tempdir().unwrap();
    let catalog = write_catalog(dir.path());
    let outdir = dir.path().join("out");
    seed_cache(&outdir);

    run_pipeline(&catalog, &outdir);

    // item report: rows in catalog order, citation counts from the caches
    let report = fs::read_to_string(outdir.join("app_summary_report.csv")).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(
        lines[0],
        "App,NumberDownloads,CitationId,NumberCitations,Origin,Journal,PublishDate"
    );
    assert_eq!(lines[1], "AppA,500,111,2,United States,Nat Methods,2019 Mar");
    assert_eq!(lines[2], "AppB,40,222,0,England,PLoS One,2020 Jan");
    assert_eq!(lines[3], "AppC,7,333,1,Germany,BMC Bioinformatics,2018");

    // empty citation set never creates a citing-records file
    assert!(!outdir.join("data/AppB.cited_papers.medline").exists());

    // corpus: PMID 902 deduplicated, AppA's copy (first in catalog order) wins
    let corpus =
        fs::read_to_string(outdir.join("unique_set_of_cited_publication.medline")).unwrap();
    assert_eq!(corpus.matches("PMID- 902").count(), 1);
    assert!(corpus.contains("PMID- 901"));
    assert!(!corpus.contains("Duplicate Copy"));

    // counts are computed over the deduplicated corpus
    let origins = fs::read_to_string(outdir.join("cited_publications_country_of_origin.csv")).unwrap();
    assert!(origins.starts_with("Country,Count\n"));
    assert!(origins.contains("England,1"));
    assert!(origins.contains("United States,1"));
    assert!(!origins.contains("France"));

    let grants = fs::read_to_string(outdir.join("cited_publications_grants.csv")).unwrap();
    assert!(grants.starts_with("Grant,Count\n"));
    assert!(grants.contains("X,1"));
    assert!(grants.contains("Y,1"));

    let journals = fs::read_to_string(outdir.join("cited_publications_journal.csv")).unwrap();
    assert!(journals.contains("Bioinformatics,1"));
    assert!(journals.contains("Nat Methods,1"));

    // run summary counts citations per item before deduplication
    let summary = fs::read_to_string(outdir.join("summary.txt")).unwrap();
    assert!(summary.contains("Number of App Publications: 3"));
    assert!(summary.contains("Total citations: 3"));
    assert!(summary.contains("Total unique citations: 2"));
}

#[test]
fn test_pipeline_is_idempotent_over_cache() {
    let dir = tempdir().unwrap();
    let catalog = write_catalog(dir.path());
    let outdir = dir.path().join("out");
    seed_cache(&outdir);

    run_pipeline(&catalog, &outdir);
    let first = fs::read_to_string(outdir.join("unique_set_of_cited_publication.medline")).unwrap();

    run_pipeline(&catalog, &outdir);
    let second = fs::read_to_string(outdir.join("unique_set_of_cited_publication.medline")).unwrap();

    assert_eq!(first, second);
}
