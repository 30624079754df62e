//! Failure taxonomy for the watch list search.

use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong between dispatching the search and reading
/// the issue keys out of the response.
#[derive(Debug, Error)]
pub enum SearchError {
  /// The search URL could not be built from the origin.
  #[error("Invalid search URL: {0}")]
  InvalidUrl(#[from] url::ParseError),

  /// The request never produced a response (DNS, TLS, refused, timed out).
  #[error("GET {url} failed")]
  Transport {
    url: String,
    #[source]
    source: reqwest::Error,
  },

  /// The server rejected the credentials, or there were none.
  #[error("Authentication failed. Please check your Jira credentials.")]
  Unauthorized,

  /// Any other non-success status.
  #[error("Unexpected error: HTTP {status} - {body}")]
  Status { status: StatusCode, body: String },

  /// The body was not JSON, or had no `issues` array of keyed records.
  #[error("Failed to parse Jira search response")]
  Malformed(#[source] serde_json::Error),
}
