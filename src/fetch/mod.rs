//! Source retrieval.
//!
//! A fetch is a single GET with no retry. Failures never propagate past this
//! module: [`fetch_content`] logs a warning and hands back empty content so the
//! rest of the run proceeds with the remaining sources and the seed domains.

use log::{debug, warn};

use crate::error_handling::FetchError;

/// Fetches a URL and returns its decoded text body.
///
/// Non-success statuses are turned into [`FetchError::Status`]; transport
/// failures are categorized by [`categorize_reqwest_error`](crate::error_handling::categorize_reqwest_error).
///
/// # Errors
///
/// Returns a `FetchError` for any failure: timeout, connection error,
/// non-2xx status, or an unreadable body.
pub async fn try_fetch(client: &reqwest::Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    let body = response.text().await?;
    debug!("Fetched {} bytes from {}", body.len(), url);
    Ok(body)
}

/// Fetches a URL, degrading any failure to an empty string.
///
/// The failure reason is logged at `warn` level together with the URL.
pub async fn fetch_content(client: &reqwest::Client, url: &str) -> String {
    match try_fetch(client, url).await {
        Ok(body) => body,
        Err(e) => {
            warn!("Failed to fetch {}: {}", url, e);
            String::new()
        }
    }
}
