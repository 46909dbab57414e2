//! Adblock filter-list extraction.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use super::{compile_regex_unsafe, wildcard};

/// `||domain^` as written in adblock network rules.
const ADBLOCK_RULE_PATTERN: &str = r"\|\|([a-zA-Z0-9.-]+)\^";

static ADBLOCK_RULE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(ADBLOCK_RULE_PATTERN, "ADBLOCK_RULE_RE"));

/// Extracts domains from adblock filter syntax.
///
/// Captures the text between `||` and `^` of every rule anywhere in the
/// content, skipping `www.` hosts, and returns each as a `*.` rule.
pub fn extract_adblock(content: &str) -> BTreeSet<String> {
    ADBLOCK_RULE_RE
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|domain| !domain.is_empty() && !domain.starts_with("www."))
        .map(wildcard)
        .collect()
}
