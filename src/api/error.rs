//! Error definitions for store calls.

use thiserror::Error;

/// Errors that can occur while talking to the data store.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection refused, timeout, TLS failure and the like.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The store answered with a non-2xx status.
    #[error("Request failed with status code {status}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected record shape.
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request URL could not be built from the base URL.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Signup with an email that is already registered.
    #[error("User with this email already exists")]
    UserExists,

    /// No user record matched the email/password pair.
    #[error("Invalid email or password")]
    InvalidUserCredentials,

    /// No admin record matched the username/password pair.
    #[error("Invalid username or password")]
    InvalidAdminCredentials,
}

impl ApiError {
    /// Returns true if the store reported the record as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

/// Result type for store operations.
pub type ApiResult<T> = Result<T, ApiError>;
