//! Plain hostname-list extraction.

use std::collections::BTreeSet;

use super::wildcard;

/// Extracts domains from a one-hostname-per-line list.
///
/// Blank lines and `#` comments are skipped. Only the first whitespace-delimited
/// token of a line is considered, so trailing annotations are dropped. A token
/// is accepted if it contains a dot and is not a `www.` host.
pub fn extract_plain_list(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_whitespace().next())
        .filter(|domain| domain.contains('.') && !domain.starts_with("www."))
        .map(wildcard)
        .collect()
}
