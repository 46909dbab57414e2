//! Error type definitions.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Reasons a single source fetch can fail.
///
/// None of these are fatal; the fetcher logs them and substitutes empty content.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("HTTP status {0}")]
    Status(reqwest::StatusCode),

    /// The request did not complete within the configured timeout.
    #[error("request timed out: {0}")]
    Timeout(#[source] ReqwestError),

    /// The TCP/TLS connection could not be established.
    #[error("connection failed: {0}")]
    Connect(#[source] ReqwestError),

    /// The response body could not be read or decoded as text.
    #[error("failed to read response body: {0}")]
    Body(#[source] ReqwestError),

    /// Any other request failure (invalid URL, redirect loop, ...).
    #[error("request failed: {0}")]
    Request(#[source] ReqwestError),
}

/// Error types for writing rule files.
#[derive(Error, Debug)]
pub enum WriteError {
    /// The output directory could not be created.
    #[error("Failed to create output directory {}: {source}", path.display())]
    CreateDir {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The rule file could not be written.
    #[error("Failed to write rules to {}: {source}", path.display())]
    Write {
        /// File that could not be written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
