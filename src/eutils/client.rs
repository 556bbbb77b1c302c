use anyhow::Result;
use log::{debug, error};
use std::time::Duration;

/// Body prefix NCBI returns when an id was rejected by the upstream service.
const REJECTED_ID_MARKER: &str = "id: ";

/// Configuration for the E-utilities client, built at startup and passed in
/// explicitly.
#[derive(Debug, Clone)]
pub struct EutilsConfig {
    /// Service base URL, assumed to end with `/`.
    pub base_url: String,
    /// Database queried for records and citation links.
    pub db: String,
    /// elink link name selecting the "cited in" relation.
    pub link_name: String,
    /// Tool name sent with every request, as NCBI asks of API callers.
    pub tool: String,
    /// Contact email sent with every request.
    pub email: String,
    /// Fixed pause before every call. NCBI blocks clients issuing 3 or more
    /// requests per second, so calls are serialized behind this delay.
    pub delay: Duration,
}

impl EutilsConfig {
    pub fn new(email: &str) -> Self {
        Self {
            base_url: "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/".to_string(),
            db: "pubmed".to_string(),
            link_name: "pubmed_pubmed_citedin".to_string(),
            tool: "appCitationStats".to_string(),
            email: email.to_string(),
            delay: Duration::from_millis(1000),
        }
    }
}

/// Rate-limited client for the NCBI efetch/elink endpoints.
///
/// Every failure mode (transport error, non-200 status, rejected-id body)
/// is logged and surfaces as `None`; the caller decides whether missing
/// data is fatal for its item. No retries are attempted.
pub struct EutilsClient {
    http: reqwest::Client,
    config: EutilsConfig,
}

impl EutilsClient {
    pub fn new(config: EutilsConfig) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, config })
    }

    /// Fetch MEDLINE-format records for one or more ids (comma-joined, at
    /// most the service's per-call ceiling).
    pub async fn fetch_records(&self, ids: &[String]) -> Option<String> {
        let url = format!(
            "{}efetch.fcgi?db={}&id={}&rettype=medline&tool={}&email={}",
            self.config.base_url,
            self.config.db,
            ids.join(","),
            self.config.tool,
            self.config.email
        );
        debug!("Fetching records for {} id(s)", ids.len());
        let text = self.get_text(&url).await?;
        if text.starts_with(REJECTED_ID_MARKER) {
            error!("Service rejected id(s) {}: {}", ids.join(","), text.trim_end());
            return None;
        }
        Some(text)
    }

    /// Fetch the raw elink JSON listing publications citing `id`.
    pub async fn fetch_citation_links(&self, id: &str) -> Option<String> {
        let url = format!(
            "{}elink.fcgi?dbfrom={}&retmode=json&linkname={}&id={}&tool={}&email={}",
            self.config.base_url,
            self.config.db,
            self.config.link_name,
            id,
            self.config.tool,
            self.config.email
        );
        debug!("Fetching citation links for id {}", id);
        self.get_text(&url).await
    }

    /// Issue one rate-limited GET, mapping any failure to `None`.
    async fn get_text(&self, url: &str) -> Option<String> {
        tokio::time::sleep(self.config.delay).await;
        match self.http.get(url).send().await {
            Ok(resp) => {
                let status = resp.status();
                if status != reqwest::StatusCode::OK {
                    error!("Received code {} from query: {}", status.as_u16(), url);
                    return None;
                }
                match resp.text().await {
                    Ok(text) => Some(text),
                    Err(e) => {
                        error!("Failed to read response body from {}: {}", url, e);
                        None
                    }
                }
            }
            Err(e) => {
                error!("Request failed for {}: {}", url, e);
                None
            }
        }
    }
}
