use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "app-citation-stats")]
#[command(about = "Aggregates citation statistics for app publications via the NCBI E-utilities API")]
#[command(version = "1.0.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch MEDLINE records and citation links into the cache directory
    Fetch(FetchArgs),

    /// Build the deduplicated corpus and all reports from cached data
    Summarize(SummarizeArgs),

    /// Run the full pipeline: fetch -> summarize
    Pipeline(PipelineArgs),
}

#[derive(Parser, Clone)]
pub struct FetchArgs {
    /// Tab-delimited catalog file with columns: name, citation, downloads
    #[arg(short, long, required = true)]
    pub catalog: String,

    /// Output directory (cache files go under <outdir>/data)
    #[arg(short, long, required = true)]
    pub outdir: String,

    /// Valid email address sent to the NCBI web API, as its documentation requires
    #[arg(short, long, required = true)]
    pub email: String,

    /// Tool name sent to the NCBI web API
    #[arg(long, default_value = "appCitationStats")]
    pub tool: String,

    /// E-utilities base URL, must end with /
    #[arg(long, default_value = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/")]
    pub base_url: String,

    /// Milliseconds to sleep before every API call (NCBI blocks at 3 requests/second)
    #[arg(long, default_value = "1000")]
    pub sleep_ms: u64,

    /// Maximum ids per multi-id efetch call
    #[arg(long, default_value_t = crate::eutils::DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Logging level (DEBUG, INFO, WARN, ERROR, OFF)
    #[arg(short, long, default_value = "INFO")]
    pub log_level: String,
}

#[derive(Parser, Clone)]
pub struct SummarizeArgs {
    /// Tab-delimited catalog file with columns: name, citation, downloads
    #[arg(short, long, required = true)]
    pub catalog: String,

    /// Output directory holding the data/ cache from a prior fetch
    #[arg(short, long, required = true)]
    pub outdir: String,

    /// Logging level (DEBUG, INFO, WARN, ERROR, OFF)
    #[arg(short, long, default_value = "INFO")]
    pub log_level: String,
}

#[derive(Parser, Clone)]
pub struct PipelineArgs {
    /// Tab-delimited catalog file with columns: name, citation, downloads
    #[arg(short, long, required = true)]
    pub catalog: String,

    /// Output directory
    #[arg(short, long, required = true)]
    pub outdir: String,

    /// Valid email address sent to the NCBI web API, as its documentation requires
    #[arg(short, long, required = true)]
    pub email: String,

    /// Tool name sent to the NCBI web API
    #[arg(long, default_value = "appCitationStats")]
    pub tool: String,

    /// E-utilities base URL, must end with /
    #[arg(long, default_value = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/")]
    pub base_url: String,

    /// Milliseconds to sleep before every API call (NCBI blocks at 3 requests/second)
    #[arg(long, default_value = "1000")]
    pub sleep_ms: u64,

    /// Maximum ids per multi-id efetch call
    #[arg(long, default_value_t = crate::eutils::DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Logging level (DEBUG, INFO, WARN, ERROR, OFF)
    #[arg(short, long, default_value = "INFO")]
    pub log_level: String,
}
