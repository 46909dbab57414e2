//! Rule normalization and rule file output.
//!
//! Key functions:
//! - `normalize()` - Lowercases a domain and enforces the `*.` wildcard prefix
//! - `collect_rules()` - Filters, normalizes, deduplicates, and sorts a domain set
//! - `save_rules()` - Writes a rule file, replacing any previous contents

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use log::info;

use crate::config::WILDCARD_PREFIX;
use crate::error_handling::WriteError;

/// Normalizes a raw domain string into a wildcard rule.
///
/// Trims surrounding whitespace, lowercases, and prepends `*.` unless already
/// present. No further hostname validation is done, so malformed input still
/// produces a prefixed (if meaningless) rule.
///
/// The function is idempotent: normalizing a normalized rule returns it unchanged.
pub fn normalize(raw: &str) -> String {
    let domain = raw.trim().to_lowercase();
    if domain.starts_with(WILDCARD_PREFIX) {
        domain
    } else {
        format!("{}{}", WILDCARD_PREFIX, domain)
    }
}

/// Builds the sorted, deduplicated rule set for an output file.
///
/// Blank and whitespace-only entries are dropped before normalization.
/// Because normalization lowercases, entries that differ only in case collapse
/// into one rule.
pub fn collect_rules<I, S>(domains: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    domains
        .into_iter()
        .filter(|d| !d.as_ref().trim().is_empty())
        .map(|d| normalize(d.as_ref()))
        .collect()
}

/// Writes the rule set for `domains` to `path`, one rule per line.
///
/// The file is UTF-8, sorted ascending, and ends with a single trailing
/// newline. Existing contents are replaced, never merged.
///
/// # Returns
///
/// The number of rules written.
///
/// # Errors
///
/// Returns `WriteError::Write` if the file cannot be written. The parent
/// directory must already exist.
pub fn save_rules<I, S>(domains: I, path: &Path) -> Result<usize, WriteError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let rules = collect_rules(domains);

    let mut contents = rules.iter().map(String::as_str).collect::<Vec<_>>().join("\n");
    contents.push('\n');

    fs::write(path, contents).map_err(|source| WriteError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Saved {} domains to {}", rules.len(), path.display());
    Ok(rules.len())
}
