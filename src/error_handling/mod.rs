//! Error types and error categorization.
//!
//! This module provides:
//! - Error type definitions for initialization, fetching, and writing
//! - Categorization of `reqwest` errors into fetch failure kinds
//!
//! Only write failures abort a run. Fetch failures degrade to empty content at
//! the fetcher boundary.

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{FetchError, InitializationError, WriteError};
