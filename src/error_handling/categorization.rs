//! Error categorization.
//!
//! Maps `reqwest` errors onto [`FetchError`] so warnings name the failure
//! class rather than repeating the raw transport message.

use super::types::FetchError;

/// Categorizes a `reqwest::Error` into a `FetchError`.
///
/// Status errors (as produced by `Response::error_for_status`) are checked
/// first, then timeouts, connection failures, and body/decode errors. Anything
/// else becomes [`FetchError::Request`].
pub fn categorize_reqwest_error(error: reqwest::Error) -> FetchError {
    if let Some(status) = error.status() {
        return FetchError::Status(status);
    }

    if error.is_timeout() {
        FetchError::Timeout(error)
    } else if error.is_connect() {
        FetchError::Connect(error)
    } else if error.is_body() || error.is_decode() {
        FetchError::Body(error)
    } else {
        FetchError::Request(error)
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        categorize_reqwest_error(error)
    }
}
