//! Client errors

use thiserror::Error;

/// Errors that can occur while talking to the BAS web services
///
/// A response envelope whose `success` field is `false` is NOT an error; it
/// is returned as a normal [`crate::BasResponse`] for the caller to inspect.
#[derive(Debug, Error)]
pub enum BasError {
    /// Failed to connect to the service
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request failed (non-2xx status or mid-request transport error)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Request timed out
    #[error("Request timed out")]
    Timeout,

    /// Response body was not a well-formed service envelope
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// ISO 639 reference tables failed to load
    #[error("Language table error: {0}")]
    LanguageTable(#[from] iso639::TableError),

    /// The response carries no download link
    #[error("Response has no download link")]
    NoDownloadLink,

    /// Fetching the result artifact failed
    #[error("Download failed: {0}")]
    DownloadFailed(String),

    /// Local file I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for BasError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}
