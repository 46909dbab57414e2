//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including request timeouts and output artifact locations.

/// User-Agent sent with every source request.
///
/// Some list hosts reject anonymous clients, so the updater identifies itself
/// with a fixed, descriptive value.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; AdGuard-Updater/1.0)";

// Network operation timeouts
/// Total per-request timeout in seconds (connect + headers + body)
pub const FETCH_TIMEOUT_SECS: u64 = 15;
/// TCP connection timeout in seconds
/// Bounded separately so an unroutable host fails well before the full request timeout
pub const CONNECT_TIMEOUT_SECS: u64 = 5;

// Output artifacts
/// Directory the rule files are written to (created if absent)
pub const DEFAULT_OUTPUT_DIR: &str = "dns-rules";
/// Rules for the home category
pub const HOME_RULES_FILE: &str = "home.txt";
/// Rules for the enterprise category
pub const ENTERPRISE_RULES_FILE: &str = "enterprise.txt";
/// Union of home and enterprise rules
pub const HYBRID_RULES_FILE: &str = "hybrid.txt";

/// Prefix every stored rule carries.
pub const WILDCARD_PREFIX: &str = "*.";
