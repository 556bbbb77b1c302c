/// Line prefix that carries a record's unique identifier. A new `PMID-`
/// line marks the start of the next record in a multi-record file.
pub const PMID_PREFIX: &str = "PMID-";

/// Default mapping from MEDLINE line prefixes to human-readable labels.
///
/// The prefixes are matched verbatim against the start of each line,
/// including the column-padding spaces before the dash.
const DEFAULT_FIELDS: &[(&str, &str)] = &[
    ("TA  - ", "journal"),
    ("GR  - ", "grant"),
    ("TI  - ", "title"),
    ("DP  - ", "publishdate"),
    ("PL  - ", "origin"),
    ("LID - ", "doi"),
];

/// Bidirectional prefix/label table for the recognized MEDLINE fields.
///
/// Built once at startup and passed through calls; nothing in the crate
/// keeps field mappings in global state.
#[derive(Debug, Clone)]
pub struct FieldTable {
    fields: Vec<(String, String)>,
}

impl FieldTable {
    /// Table covering the standard MEDLINE fields this tool reports on.
    pub fn medline() -> Self {
        Self {
            fields: DEFAULT_FIELDS
                .iter()
                .map(|(p, l)| (p.to_string(), l.to_string()))
                .collect(),
        }
    }

    /// Iterate over `(prefix, label)` pairs in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(p, l)| (p.as_str(), l.as_str()))
    }

    /// Look up the raw line prefix for a label, e.g. `"journal"` -> `"TA  - "`.
    pub fn prefix_for(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(_, l)| l == label)
            .map(|(p, _)| p.as_str())
    }

    /// Look up the label for a raw line prefix.
    #[allow(dead_code)]
    pub fn label_for(&self, prefix: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, l)| l.as_str())
    }
}

impl Default for FieldTable {
    fn default() -> Self {
        Self::medline()
    }
}
