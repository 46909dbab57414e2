//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, output locations, etc.)
//! - The run configuration and logging option types
//! - The built-in source catalog and curated seed domains

mod constants;
mod sources;
mod types;

// Re-export all constants
pub use constants::*;
pub use sources::{
    default_enterprise_seeds, default_home_seeds, default_sources, Category, Source, SourceFormat,
};
pub use types::{Config, LogFormat, LogLevel};
