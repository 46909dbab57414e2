//! Vendor-name heuristics for prose and HTML sources.
//!
//! These sources are documentation pages rather than lists, so domains are
//! found by looking for known vendor name stems. Matching is best effort:
//! surrounding text can leak into a match and domains without a known stem are
//! missed.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use super::{compile_regex_unsafe, wildcard};

// A vendor stem followed by domain characters and an alphabetic suffix
const MICROSOFT_MENTION_PATTERN: &str =
    r"(?i)(?:microsoft|office|sharepoint|outlook|teams)[a-zA-Z0-9.-]*\.[a-zA-Z]+";
const COLLABORATION_MENTION_PATTERN: &str =
    r"(?i)(?:dingtalk|feishu|larksuite|zoom|webex)[a-zA-Z0-9.-]*\.[a-zA-Z]+";

// <subdomain-or-empty>.<vendor>.<tld>
const MICROSOFT_SUFFIX_PATTERN: &str =
    r"(?i)[a-zA-Z0-9.-]*\.(?:microsoft|office|sharepoint|outlook|teams)\.[a-zA-Z]+";

static MICROSOFT_MENTION_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(MICROSOFT_MENTION_PATTERN, "MICROSOFT_MENTION_RE"));
static COLLABORATION_MENTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(COLLABORATION_MENTION_PATTERN, "COLLABORATION_MENTION_RE")
});
static MICROSOFT_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(MICROSOFT_SUFFIX_PATTERN, "MICROSOFT_SUFFIX_RE"));

/// Extracts anything that starts with a known vendor stem and ends in a
/// dotted alphabetic suffix, e.g. `outlook.office365.com` or `zoom.us`.
pub fn extract_vendor_mentions(content: &str) -> BTreeSet<String> {
    [&MICROSOFT_MENTION_RE, &COLLABORATION_MENTION_RE]
        .into_iter()
        .flat_map(|re| re.find_iter(content))
        .map(|m| wildcard(m.as_str()))
        .collect()
}

/// Extracts `<sub>.<vendor>.<tld>` hosts for the Microsoft 365 vendor names.
///
/// The subdomain part may be empty. Leading dots are trimmed from a match, so
/// wildcard notation in the page (`*.office.com`) yields `*.office.com` rather
/// than a rule with an empty label.
pub fn extract_vendor_suffixes(content: &str) -> BTreeSet<String> {
    MICROSOFT_SUFFIX_RE
        .find_iter(content)
        .map(|m| m.as_str().trim_start_matches('.'))
        .filter(|domain| !domain.is_empty())
        .map(wildcard)
        .collect()
}
