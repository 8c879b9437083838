use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum GfError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unsuccessful HTTP status code.
    ///
    /// The response body has already been logged at `error` level by the
    /// time this variant is constructed.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The credential exchange did not yield a usable bearer token.
    #[error("Auth error: {0}")]
    Auth(String),

    /// A successful response carried a body that was not valid JSON.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),
}
