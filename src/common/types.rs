use crate::catalog::CatalogEntry;
use crate::medline::FieldMap;

/// Everything known about one catalog item after the fetch stage: the
/// catalog row, its own parsed bibliographic fields, and the ids of the
/// publications citing it.
#[derive(Debug, Clone)]
pub struct ItemSummary {
    pub entry: CatalogEntry,
    pub fields: FieldMap,
    pub citing_ids: Vec<String>,
}

impl ItemSummary {
    /// Space-joined values of a field from the item's own record; empty
    /// string when the field is absent.
    pub fn joined_field(&self, label: &str) -> String {
        self.fields
            .get(label)
            .map(|values| values.join(" "))
            .unwrap_or_default()
    }
}

/// Statistics from the fetch step
#[derive(Debug, Clone, Default)]
pub struct FetchStats {
    pub items: usize,
    pub records_fetched: usize,
    pub total_citations: usize,
    pub unique_citations: usize,
    pub batch_files_written: usize,
}

/// Statistics from the summarize step
#[derive(Debug, Clone, Default)]
pub struct SummarizeStats {
    pub items: usize,
    pub total_citations: usize,
    pub unique_citations: usize,
    pub corpus_records: usize,
    pub countries: usize,
    pub grants: usize,
    pub journals: usize,
}
