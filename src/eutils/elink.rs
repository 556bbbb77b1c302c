use anyhow::{Context, Result};
use log::warn;
use serde_json::Value;
use std::fs;
use std::path::Path;

use super::client::EutilsClient;

/// Extract citing-publication ids from an elink JSON response of the shape
/// `{"linksets": [{"linksetdbs": [{"links": [id, ...]}]}]}`.
///
/// Items with zero citations commonly come back with the nesting truncated
/// at some level, so every missing key or empty array degrades to an empty
/// list instead of an error. Ids are accepted as JSON strings or numbers.
pub fn citing_ids_from_json(text: &str) -> Vec<String> {
    let data: Value = match serde_json::from_str(text) {
        Ok(v) => v,
        Err(_) => return Vec::new(),
    };

    data.get("linksets")
        .and_then(|v| v.as_array())
        .and_then(|sets| sets.first())
        .and_then(|set| set.get("linksetdbs"))
        .and_then(|v| v.as_array())
        .and_then(|dbs| dbs.first())
        .and_then(|db| db.get("links"))
        .and_then(|v| v.as_array())
        .map(|links| {
            links
                .iter()
                .filter_map(|link| match link {
                    Value::String(s) => Some(s.clone()),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Read the citing ids from a cached elink response, returning an empty set
/// when the cache file does not exist.
pub fn read_cached_citing_ids<P: AsRef<Path>>(cache_path: P) -> Result<Vec<String>> {
    let cache_path = cache_path.as_ref();
    if !cache_path.exists() {
        return Ok(Vec::new());
    }
    let text = fs::read_to_string(cache_path)
        .with_context(|| format!("Failed to read citation cache: {:?}", cache_path))?;
    Ok(citing_ids_from_json(&text))
}

/// Resolve the set of ids citing `id`, fetching and caching the elink
/// response when `cache_path` does not already exist.
///
/// Existence of the cache file alone is the skip signal; freshness is never
/// re-validated. A failed fetch leaves no cache file and yields an empty set.
pub async fn resolve_citing_ids<P: AsRef<Path>>(
    client: &EutilsClient,
    id: &str,
    cache_path: P,
) -> Result<Vec<String>> {
    let cache_path = cache_path.as_ref();
    if !cache_path.exists() {
        match client.fetch_citation_links(id).await {
            Some(text) => {
                fs::write(cache_path, text)
                    .with_context(|| format!("Failed to write citation cache: {:?}", cache_path))?;
            }
            None => {
                warn!("No citation links obtained for id {}", id);
            }
        }
    }
    read_cached_citing_ids(cache_path)
}
