//! Labeled-field extraction.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use super::compile_regex_unsafe;

/// `domain: "value"`, `"domain"="value"` and similar; the key may be quoted.
const LABELED_DOMAIN_PATTERN: &str = r#""?domain"?\s*[:=]\s*"([a-zA-Z0-9.-]+)""#;

static LABELED_DOMAIN_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(LABELED_DOMAIN_PATTERN, "LABELED_DOMAIN_RE"));

/// Collects the quoted values of `domain` key/value pairs in free text.
///
/// Values are returned exactly as written. They are not wildcard-prefixed or
/// lowercased here.
pub fn extract_labeled_fields(content: &str) -> BTreeSet<String> {
    LABELED_DOMAIN_RE
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
