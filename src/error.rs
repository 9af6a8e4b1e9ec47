//! Top-level error for the command-line front end.

use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;
use crate::routing::Page;
use crate::session::SessionError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Session(#[from] SessionError),

    /// The page guard refused the current session.
    #[error("{page} is not available to the current session; log in at {redirect}")]
    Denied { page: Page, redirect: Page },

    /// The session has not been restored yet.
    #[error("Session is still loading")]
    SessionLoading,

    /// No record with the given id in the loaded list.
    #[error("No {kind} with id {id}")]
    UnknownRecord { kind: &'static str, id: String },

    /// A view rejected the action; the message is the page banner.
    #[error("{0}")]
    Rejected(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<&'static str> for AppError {
    fn from(message: &'static str) -> Self {
        AppError::Rejected(message.to_string())
    }
}

impl From<String> for AppError {
    fn from(message: String) -> Self {
        AppError::Rejected(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denied_display() {
        let err = AppError::Denied {
            page: Page::Admin,
            redirect: Page::AdminLogin,
        };
        assert_eq!(
            err.to_string(),
            "/admin is not available to the current session; log in at /admin-login"
        );
    }

    #[test]
    fn test_rejected_passthrough() {
        let err: AppError = "Failed to save room.".into();
        assert_eq!(err.to_string(), "Failed to save room.");
    }
}
