use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Greedy leading-path match: everything up to and including the last `/`.
    static ref LEADING_PATH: Regex = Regex::new("^.*/").expect("static regex must compile");
}

/// Ordered substring-rule table mapping funder name variants to one
/// canonical name. First match wins; the order is load-bearing for values
/// matching more than one rule, so keep it as-is.
const FUNDER_RULES: &[(&[&str], &str)] = &[
    (&["Wellcome Trust"], "Wellcome Trust"),
    (&["Medical Research Council"], "Medical Research Council"),
    (&["European Regional Development"], "European Regional Development"),
    (&["European Research Council"], "European Research Council"),
    (&["/Cancer Research UK/"], "Cancer Research UK"),
    (
        &["/Worldwide Cancer Research/United Kingdom"],
        "Worldwide Cancer Research UK",
    ),
    (&["British Heart Foundation/"], "British Heart Foundation"),
    (
        &["Howard Hughes Medical Institute"],
        "Howard Hughes Medical Institute",
    ),
    (
        &["CIHR/Canada", "Canadian Institutes of Health Research"],
        "CIHR Canada",
    ),
    (
        &["Deutsche Forschungsgemeinschaft"],
        "Deutsche Forschungsgemeinschaft",
    ),
    (
        &[
            "Natural Science Foundation of China",
            "National Natural Scientific Foundation of China",
            "National Nature Science Foundation of China",
            "National Science Foundation of China",
        ],
        "National Natural Science Foundation of China",
    ),
    (
        &["National Institute of Allergy and Infectious Diseases"],
        "NIAID",
    ),
    (
        &["Gordon and Betty Moore Foundation"],
        "Gordon and Betty Moore Foundation",
    ),
];

/// Collapse the many spellings of a MEDLINE `GR  - ` grant line into one
/// funder bucket.
///
/// NIH lines of the form `R01 CA123456/CA/NCI NIH HHS/United States` reduce
/// to the institute acronym (`NCI`); intramural `.../NIH HHS/United States`
/// lines pass through unchanged. Everything else goes through the ordered
/// rule table, and values matching no rule pass through unchanged.
pub fn normalize_grant(value: &str) -> String {
    if value.contains("/NIH HHS/United States") {
        return value.to_string();
    }
    if value.contains(" NIH HHS/United States") {
        let stripped = value.replace(" NIH HHS/United States", "");
        return LEADING_PATH.replace(&stripped, "").into_owned();
    }
    for (needles, canonical) in FUNDER_RULES {
        if needles.iter().any(|needle| value.contains(needle)) {
            return (*canonical).to_string();
        }
    }
    value.to_string()
}
