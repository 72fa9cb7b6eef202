//! Custom error types for the application.
//!
//! The only fallible boundary in this application is the content
//! provider: view-state transitions never fail, they are no-ops when a
//! guard rejects them.

use thiserror::Error;

/// Network/fetch-related errors for content requests.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// Browser window not available.
    #[error("browser window not available")]
    NoWindow,
    /// Failed to create the HTTP request.
    #[error("failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, DNS, offline).
    #[error("network error: {0}")]
    Network(String),
    /// HTTP error response (non-2xx status).
    #[error("HTTP error: {0}")]
    Http(u16),
    /// Failed to read the response body.
    #[error("failed to read response")]
    ResponseReadFailed,
    /// Response body was not text.
    #[error("invalid response content")]
    InvalidContent,
    /// JSON decoding error.
    #[error("JSON parse error: {0}")]
    JsonParse(String),
    /// Request exceeded the configured timeout.
    #[error("request timed out")]
    Timeout,
}
