//! Configuration types.
//!
//! This module defines the run configuration and the enums that control
//! logging output.

use std::path::PathBuf;

use crate::config::constants::{
    CONNECT_TIMEOUT_SECS, DEFAULT_OUTPUT_DIR, DEFAULT_USER_AGENT, FETCH_TIMEOUT_SECS,
};
use crate::config::sources::{
    default_enterprise_seeds, default_home_seeds, default_sources, Source,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Run configuration.
///
/// Everything a run needs is carried here and handed to
/// [`run_update`](crate::run_update) by value, so tests can point the
/// updater at mock sources and a temporary output directory.
///
/// # Examples
///
/// ```no_run
/// use dns_rules::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     output_dir: PathBuf::from("/tmp/rules"),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the rule files are written to
    pub output_dir: PathBuf,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// TCP connect timeout in seconds
    pub connect_timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Sources to fetch, in fetch order
    pub sources: Vec<Source>,

    /// Domains always present in the home list
    pub home_seeds: Vec<String>,

    /// Domains always present in the enterprise list
    pub enterprise_seeds: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            timeout_seconds: FETCH_TIMEOUT_SECS,
            connect_timeout_seconds: CONNECT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            sources: default_sources(),
            home_seeds: default_home_seeds(),
            enterprise_seeds: default_enterprise_seeds(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Category, SourceFormat};

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_log_level_ordering() {
        let error = log::LevelFilter::from(LogLevel::Error);
        let warn = log::LevelFilter::from(LogLevel::Warn);
        let info = log::LevelFilter::from(LogLevel::Info);
        let debug = log::LevelFilter::from(LogLevel::Debug);
        let trace = log::LevelFilter::from(LogLevel::Trace);

        assert!(error < warn);
        assert!(warn < info);
        assert!(info < debug);
        assert!(debug < trace);
    }

    #[test]
    fn test_config_default_values() {
        let config = Config::default();
        assert_eq!(config.output_dir, PathBuf::from("dns-rules"));
        assert_eq!(config.timeout_seconds, 15);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.log_format, LogFormat::Plain);
        assert!(!config.home_seeds.is_empty());
        assert!(!config.enterprise_seeds.is_empty());
    }

    #[test]
    fn test_config_default_source_order() {
        // Home sources are fetched before enterprise ones, with the Microsoft 365
        // page first among the enterprise sources
        let config = Config::default();
        let categories: Vec<Category> = config.sources.iter().map(|s| s.category).collect();
        assert_eq!(
            categories,
            vec![
                Category::Home,
                Category::Home,
                Category::Home,
                Category::Enterprise,
                Category::Enterprise,
                Category::Enterprise,
            ]
        );
        assert_eq!(config.sources[3].format, SourceFormat::VendorSuffix);
    }
}
