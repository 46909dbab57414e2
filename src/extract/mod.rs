//! Domain extraction from fetched source content.
//!
//! One extractor exists per [`SourceFormat`]. Every extractor is a pure
//! function from text to a set of candidate domain strings and never fails:
//! content with no matches (including empty content) yields an empty set.
//!
//! Extractors that know their output is a hostname emit it already
//! `*.`-prefixed. [`extract_labeled_fields`] returns values verbatim and leaves
//! prefixing to [`normalize`](crate::rules::normalize).

mod adblock;
mod labeled;
mod plain_list;
mod vendor;

use std::collections::BTreeSet;

use regex::Regex;

use crate::config::{SourceFormat, WILDCARD_PREFIX};

pub use adblock::extract_adblock;
pub use labeled::extract_labeled_fields;
pub use plain_list::extract_plain_list;
pub use vendor::{extract_vendor_mentions, extract_vendor_suffixes};

impl SourceFormat {
    /// Runs the extractor for this format over `content`.
    pub fn extract(&self, content: &str) -> BTreeSet<String> {
        match self {
            SourceFormat::Adblock => extract_adblock(content),
            SourceFormat::PlainList => extract_plain_list(content),
            SourceFormat::VendorMention => extract_vendor_mentions(content),
            SourceFormat::VendorSuffix => extract_vendor_suffixes(content),
            SourceFormat::LabeledField => extract_labeled_fields(content),
        }
    }
}

/// Helper function to compile a static regex pattern, panicking with a detailed
/// error message if compilation fails. Only used for compile-time constant patterns.
fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

fn wildcard(domain: &str) -> String {
    format!("{}{}", WILDCARD_PREFIX, domain)
}
