//! HTTP client initialization.

use std::time::Duration;

use crate::config::Config;
use crate::error_handling::InitializationError;
use reqwest::ClientBuilder;

/// Initializes the HTTP client used to fetch sources.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - Total request timeout and a separate TCP connect timeout
/// - Default redirect following
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}
