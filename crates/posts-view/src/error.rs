//! Fetch error taxonomy.

use thiserror::Error;

/// Everything that can go wrong while loading the list.
///
/// The UI only ever shows the `Display` text; the variants exist so the
/// log and the tests can tell the failures apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, CORS, connection reset...)
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered outside the 2xx range
    #[error("HTTP {0}")]
    HttpStatus(u16),

    /// Body was not a JSON array of posts
    #[error("Malformed response: {0}")]
    Parse(String),

    /// The view was torn down before the response arrived
    #[error("Request cancelled")]
    Cancelled,
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}
