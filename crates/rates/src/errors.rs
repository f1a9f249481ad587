//! Error types for the rates updater.

use thiserror::Error;

/// Errors that can occur while fetching, normalizing, or writing rates.
///
/// Transport, status, parse, and shape errors are recoverable per endpoint:
/// the fetcher logs them and falls through to the next candidate. The
/// remaining variants are fatal for the run and end up in the failure
/// snapshot.
#[derive(Error, Debug)]
pub enum RatesError {
    /// HTTP transport failure (connect, timeout, body read).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// Response body was not valid JSON.
    #[error("invalid JSON from {url}: {message}")]
    Parse { url: String, message: String },

    /// JSON parsed but matched none of the known document shapes.
    #[error("unrecognized document shape from {url}")]
    Shape { url: String },

    /// The mandatory reference (USD) figure could not be resolved.
    #[error("reference rate unresolvable: {0}")]
    MissingReference(String),

    /// Every candidate endpoint failed.
    #[error("all endpoints failed, last error: {last}")]
    EndpointsExhausted { last: String },

    /// Snapshot could not be written to disk.
    #[error("failed to write snapshot to {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
